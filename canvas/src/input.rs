//! Input model: tools, mouse buttons, keys, and the gesture state machine.
//!
//! `Tool` captures what a pointer-down on empty canvas will draw.
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up, carrying everything needed to update the shape while the
//! pointer moves and to normalize it on release. Outside of `Idle`, the other
//! gestures are locked out: nothing can start drawing while a drag is in
//! flight, and so on.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{Shape, ShapeId, ShapeKind};
use crate::frame::Point;
use crate::hit::ResizeAnchor;

/// Which shape a pointer-down on empty canvas draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Rectangle,
    Circle,
}

impl Tool {
    /// The kind of shape this tool creates.
    #[must_use]
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Self::Rectangle => ShapeKind::Rectangle,
            Self::Circle => ShapeKind::Circle,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Tool used by the next drawing gesture.
    pub tool: Tool,
    /// The single selected shape, if any.
    pub selected_id: Option<ShapeId>,
    /// Read-only preview: shapes drawn without selection UI, input ignored.
    pub preview: bool,
}

/// Geometry reported at the end of a resize/rotate manipulation.
///
/// Scales are relative to the shape's canonical size at the start of the
/// manipulation. The report is transient: it is consumed on commit and never
/// stored on the shape, so successive transforms compose from the canonical
/// attributes instead of accumulating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformReport {
    /// New anchor x (corner for rectangles, center for circles), frame space.
    pub x: f64,
    /// New anchor y, frame space.
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Clockwise rotation in degrees. Not persisted.
    pub rotation: f64,
}

impl TransformReport {
    /// A report that leaves `shape` exactly as it is.
    #[must_use]
    pub fn identity(shape: &Shape) -> Self {
        let origin = shape.origin();
        Self { x: origin.x, y: origin.y, scale_x: 1.0, scale_y: 1.0, rotation: 0.0 }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A new shape is being drawn. The draft is not in the shape list.
    Drawing {
        /// Provisional shape, committed on pointer-up.
        draft: Shape,
        /// Frame-space point where the gesture started.
        anchor: Point,
    },
    /// A committed shape is following the pointer.
    Dragging {
        id: ShapeId,
        /// Pointer position minus shape origin at grab time.
        grab_offset: Point,
        /// Frame-space pointer position at grab time.
        start: Point,
        /// Shape geometry before the drag, restored on cancel.
        original: Shape,
        /// Whether the pointer has left the click slop.
        moved: bool,
    },
    /// The selected shape is being resized through one of its handles.
    Transforming {
        id: ShapeId,
        /// Handle being dragged; `None` when the host reports the transform.
        handle: Option<ResizeAnchor>,
        /// Shape geometry at the start, restored on cancel.
        original: Shape,
        /// Latest transient manipulation.
        report: TransformReport,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The in-progress draft, if drawing.
    #[must_use]
    pub fn draft(&self) -> Option<&Shape> {
        match self {
            Self::Drawing { draft, .. } => Some(draft),
            _ => None,
        }
    }
}
