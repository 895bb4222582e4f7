//! Shared numeric constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest radius a circle keeps after a resize, so it stays selectable.
pub const MIN_CIRCLE_RADIUS: f64 = 5.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit slop in pixels around resize handles.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

/// Pointer travel below which a press-and-release on a shape counts as a click.
pub const CLICK_SLOP_PX: f64 = 2.0;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke color of unselected shapes.
pub const SHAPE_STROKE: &str = "blue";

/// Stroke color of the selected shape.
pub const SELECTED_STROKE: &str = "red";

/// Fill color of resize handles.
pub const HANDLE_FILL: &str = "#FFFFFF";

/// Stroke width of shape outlines, in pixels.
pub const STROKE_WIDTH_PX: f64 = 2.0;
