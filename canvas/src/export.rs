//! Coordinate export: committed shapes to the submission payload.
//!
//! Labels are `Area1`, `Area2`, ... in list order. Rectangles encode as
//! their two corners, circles as center plus radius. Shapes enclosing no
//! area are left out and do not consume a label.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use marks_wire::{AreaEncoding, Coordinates};

use crate::doc::Shape;

/// Why a payload could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// Nothing to submit.
    #[error("Please add at least one shape before submitting.")]
    EmptyPayload,
}

/// Encode a single shape.
#[must_use]
pub fn encode(shape: &Shape) -> AreaEncoding {
    match *shape {
        Shape::Rectangle { x, y, width, height, .. } => AreaEncoding::Rect([[x, y], [x + width, y + height]]),
        Shape::Circle { x, y, radius, .. } => AreaEncoding::Circle([x, y], radius),
    }
}

/// Build the label-to-encoding payload for `shapes`.
///
/// # Errors
///
/// Returns [`ExportError::EmptyPayload`] when no shape with a non-zero area
/// remains.
pub fn export(shapes: &[Shape]) -> Result<Coordinates, ExportError> {
    let mut coords = Coordinates::new();
    for shape in shapes.iter().filter(|s| !s.is_degenerate()) {
        coords.insert(format!("Area{}", coords.len() + 1), encode(shape));
    }
    if coords.is_empty() {
        return Err(ExportError::EmptyPayload);
    }
    Ok(coords)
}
