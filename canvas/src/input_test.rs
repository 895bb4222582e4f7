#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_rectangle() {
    assert_eq!(Tool::default(), Tool::Rectangle);
}

#[test]
fn tool_maps_to_shape_kind() {
    assert_eq!(Tool::Rectangle.shape_kind(), ShapeKind::Rectangle);
    assert_eq!(Tool::Circle.shape_kind(), ShapeKind::Circle);
}

// =============================================================
// Key / Button
// =============================================================

#[test]
fn key_equality_is_by_name() {
    assert_eq!(Key("Delete".into()), Key("Delete".into()));
    assert_ne!(Key("Delete".into()), Key("Escape".into()));
}

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Primary, Button::Middle);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_has_no_selection() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Rectangle);
    assert!(ui.selected_id.is_none());
    assert!(!ui.preview);
}

// =============================================================
// TransformReport
// =============================================================

#[test]
fn identity_report_keeps_origin_and_unit_scale() {
    let shape = Shape::Circle { id: ShapeId(1), x: 12.0, y: 34.0, radius: 5.0 };
    let report = TransformReport::identity(&shape);
    assert_eq!(report.x, 12.0);
    assert_eq!(report.y, 34.0);
    assert_eq!(report.scale_x, 1.0);
    assert_eq!(report.scale_y, 1.0);
    assert_eq!(report.rotation, 0.0);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
}

#[test]
fn draft_is_exposed_only_while_drawing() {
    let draft = Shape::empty(ShapeKind::Rectangle, ShapeId(1), Point::new(1.0, 1.0));
    let drawing = InputState::Drawing { draft, anchor: Point::new(1.0, 1.0) };
    assert_eq!(drawing.draft(), Some(&draft));
    assert!(!drawing.is_idle());

    let dragging = InputState::Dragging {
        id: ShapeId(1),
        grab_offset: Point::new(0.0, 0.0),
        start: Point::new(0.0, 0.0),
        original: draft,
        moved: false,
    };
    assert!(dragging.draft().is_none());
}
