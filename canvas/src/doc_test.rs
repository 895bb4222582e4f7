#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn rect(x: f64, y: f64, width: f64, height: f64) -> Shape {
    Shape::Rectangle { id: ShapeId(1), x, y, width, height }
}

fn circle(x: f64, y: f64, radius: f64) -> Shape {
    Shape::Circle { id: ShapeId(2), x, y, radius }
}

fn frame() -> CanvasFrame {
    CanvasFrame::new(0.0, 0.0, 200.0, 100.0)
}

// =============================================================
// Shape
// =============================================================

#[test]
fn empty_shape_has_zero_extent() {
    let r = Shape::empty(ShapeKind::Rectangle, ShapeId(3), Point::new(4.0, 5.0));
    assert_eq!(r, Shape::Rectangle { id: ShapeId(3), x: 4.0, y: 5.0, width: 0.0, height: 0.0 });
    let c = Shape::empty(ShapeKind::Circle, ShapeId(4), Point::new(4.0, 5.0));
    assert_eq!(c, Shape::Circle { id: ShapeId(4), x: 4.0, y: 5.0, radius: 0.0 });
}

#[test]
fn kind_and_id_accessors() {
    assert_eq!(rect(0.0, 0.0, 1.0, 1.0).kind(), ShapeKind::Rectangle);
    assert_eq!(circle(0.0, 0.0, 1.0).kind(), ShapeKind::Circle);
    assert_eq!(circle(0.0, 0.0, 1.0).id(), ShapeId(2));
}

#[test]
fn set_origin_moves_anchor() {
    let mut s = rect(0.0, 0.0, 10.0, 10.0);
    s.set_origin(Point::new(7.0, 8.0));
    assert_eq!(s.origin(), Point::new(7.0, 8.0));
}

#[test]
fn circle_bounds_are_centered() {
    let (min, max) = circle(50.0, 40.0, 10.0).bounds();
    assert_eq!(min, Point::new(40.0, 30.0));
    assert_eq!(max, Point::new(60.0, 50.0));
}

#[test]
fn rect_contains_edges() {
    let s = rect(10.0, 10.0, 20.0, 20.0);
    assert!(s.contains(Point::new(10.0, 10.0)));
    assert!(s.contains(Point::new(30.0, 30.0)));
    assert!(!s.contains(Point::new(31.0, 20.0)));
}

#[test]
fn circle_contains_uses_distance() {
    let s = circle(0.0, 0.0, 5.0);
    assert!(s.contains(Point::new(3.0, 4.0)));
    assert!(!s.contains(Point::new(4.0, 4.0)));
}

#[test]
fn degenerate_shapes() {
    assert!(rect(0.0, 0.0, 0.0, 10.0).is_degenerate());
    assert!(rect(0.0, 0.0, 10.0, 0.0).is_degenerate());
    assert!(!rect(0.0, 0.0, 1.0, 1.0).is_degenerate());
    assert!(circle(0.0, 0.0, 0.0).is_degenerate());
    assert!(!circle(0.0, 0.0, 0.5).is_degenerate());
}

#[test]
fn clamp_position_rect_pins_far_edge() {
    let mut s = rect(190.0, 95.0, 30.0, 20.0);
    s.clamp_position(&frame());
    assert_eq!(s.origin(), Point::new(170.0, 80.0));
    assert!(s.within(&frame()));
}

#[test]
fn clamp_position_rect_pins_near_edge() {
    let mut s = rect(-5.0, -1.0, 30.0, 20.0);
    s.clamp_position(&frame());
    assert_eq!(s.origin(), Point::new(0.0, 0.0));
}

#[test]
fn clamp_position_circle_is_center_based() {
    let mut s = circle(2.0, 99.0, 10.0);
    s.clamp_position(&frame());
    assert_eq!(s.origin(), Point::new(10.0, 90.0));
    assert!(s.within(&frame()));
}

#[test]
fn clamp_position_leaves_inside_shape_alone() {
    let mut s = circle(100.0, 50.0, 10.0);
    s.clamp_position(&frame());
    assert_eq!(s.origin(), Point::new(100.0, 50.0));
}

#[test]
fn shape_json_is_tagged_by_type() {
    let value = serde_json::to_value(rect(1.0, 2.0, 3.0, 4.0)).expect("serialize");
    assert_eq!(
        value,
        json!({"type": "rectangle", "id": 1, "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0})
    );
}

#[test]
fn shape_json_id_defaults_when_absent() {
    let s: Shape = serde_json::from_value(json!({"type": "circle", "x": 1, "y": 2, "radius": 3}))
        .expect("deserialize");
    assert_eq!(s, Shape::Circle { id: ShapeId(0), x: 1.0, y: 2.0, radius: 3.0 });
}

// =============================================================
// ShapeList
// =============================================================

#[test]
fn list_new_is_empty() {
    let list = ShapeList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn next_id_is_monotonic() {
    let mut list = ShapeList::new();
    let a = list.next_id();
    let b = list.next_id();
    assert!(b > a);
    assert_eq!(a, ShapeId(1));
}

#[test]
fn push_preserves_creation_order() {
    let mut list = ShapeList::new();
    let a = list.next_id();
    let b = list.next_id();
    list.push(Shape::empty(ShapeKind::Circle, b, Point::new(0.0, 0.0)));
    list.push(Shape::empty(ShapeKind::Rectangle, a, Point::new(0.0, 0.0)));
    let ids: Vec<ShapeId> = list.iter().map(Shape::id).collect();
    assert_eq!(ids, [b, a]);
}

#[test]
fn push_advances_id_counter_past_foreign_ids() {
    let mut list = ShapeList::new();
    list.push(Shape::empty(ShapeKind::Circle, ShapeId(41), Point::new(0.0, 0.0)));
    assert_eq!(list.next_id(), ShapeId(42));
}

#[test]
fn remove_returns_shape() {
    let mut list = ShapeList::new();
    let id = list.next_id();
    list.push(Shape::empty(ShapeKind::Rectangle, id, Point::new(0.0, 0.0)));
    assert!(list.remove(id).is_some());
    assert!(list.get(id).is_none());
    assert!(list.remove(id).is_none());
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut list = ShapeList::new();
    let id = list.next_id();
    list.push(Shape::empty(ShapeKind::Rectangle, id, Point::new(0.0, 0.0)));
    list.remove(id);
    assert_ne!(list.next_id(), id);
}

#[test]
fn get_mut_edits_in_place() {
    let mut list = ShapeList::new();
    let id = list.next_id();
    list.push(Shape::empty(ShapeKind::Rectangle, id, Point::new(0.0, 0.0)));
    if let Some(shape) = list.get_mut(id) {
        shape.set_origin(Point::new(5.0, 5.0));
    }
    assert_eq!(list.get(id).map(Shape::origin), Some(Point::new(5.0, 5.0)));
}

#[test]
fn load_renumbers_in_order() {
    let mut list = ShapeList::new();
    list.load(vec![circle(1.0, 1.0, 1.0), rect(0.0, 0.0, 1.0, 1.0)]);
    let ids: Vec<ShapeId> = list.iter().map(Shape::id).collect();
    assert_eq!(ids, [ShapeId(1), ShapeId(2)]);
    assert_eq!(list.as_slice()[0].kind(), ShapeKind::Circle);
}
