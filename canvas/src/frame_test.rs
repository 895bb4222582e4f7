#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
    assert!(approx_eq(Point::new(1.0, 1.0).distance(Point::new(1.0, 1.0)), 0.0));
}

// --- CanvasFrame ---

#[test]
fn frame_default_is_empty() {
    let frame = CanvasFrame::default();
    assert_eq!(frame.width, 0.0);
    assert_eq!(frame.height, 0.0);
}

#[test]
fn frame_new_floors_negative_size_at_zero() {
    let frame = CanvasFrame::new(0.0, 0.0, -10.0, 5.0);
    assert_eq!(frame.width, 0.0);
    assert_eq!(frame.height, 5.0);
}

#[test]
fn frame_fill_surface_floors_and_centers() {
    let frame = CanvasFrame::fill_surface(801.5, 600.0);
    assert_eq!(frame.width, 801.0);
    assert_eq!(frame.height, 600.0);
    assert!(approx_eq(frame.x, 0.25));
    assert_eq!(frame.y, 0.0);
}

#[test]
fn surface_to_frame_subtracts_origin() {
    let frame = CanvasFrame::new(20.0, 10.0, 100.0, 100.0);
    let p = frame.surface_to_frame(Point::new(25.0, 15.0));
    assert_eq!(p, Point::new(5.0, 5.0));
}

#[test]
fn surface_frame_round_trip() {
    let frame = CanvasFrame::new(-7.5, 13.0, 50.0, 50.0);
    let surface = Point::new(42.0, -3.0);
    let back = frame.frame_to_surface(frame.surface_to_frame(surface));
    assert!(approx_eq(back.x, surface.x));
    assert!(approx_eq(back.y, surface.y));
}

#[test]
fn contains_includes_edges() {
    let frame = CanvasFrame::new(0.0, 0.0, 100.0, 50.0);
    assert!(frame.contains(Point::new(0.0, 0.0)));
    assert!(frame.contains(Point::new(100.0, 50.0)));
    assert!(!frame.contains(Point::new(100.1, 10.0)));
    assert!(!frame.contains(Point::new(10.0, -0.1)));
}

#[test]
fn clamp_point_pins_to_edges() {
    let frame = CanvasFrame::new(0.0, 0.0, 100.0, 50.0);
    assert_eq!(frame.clamp_point(Point::new(-5.0, 80.0)), Point::new(0.0, 50.0));
    assert_eq!(frame.clamp_point(Point::new(30.0, 20.0)), Point::new(30.0, 20.0));
}

// --- clamp_range ---

#[test]
fn clamp_range_inside_is_identity() {
    assert_eq!(clamp_range(5.0, 0.0, 10.0), 5.0);
}

#[test]
fn clamp_range_pins_both_sides() {
    assert_eq!(clamp_range(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp_range(11.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_range_empty_range_prefers_low() {
    assert_eq!(clamp_range(3.0, 8.0, 2.0), 8.0);
}
