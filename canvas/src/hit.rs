//! Hit-testing and resize-handle geometry.
//!
//! Handles belong only to the selected shape and are tested before any
//! shape body, so a handle overlapping a neighbouring shape still wins.
//! Bodies are tested topmost-first: the last committed shape is drawn last
//! and is therefore the one under the pointer.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::{Shape, ShapeId};
use crate::frame::Point;
use crate::input::TransformReport;

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Handle position on the shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Horizontal side moved by this handle: -1 left, 1 right, 0 none.
    fn x_side(self) -> i8 {
        match self {
            Self::Ne | Self::E | Self::Se => 1,
            Self::Nw | Self::W | Self::Sw => -1,
            Self::N | Self::S => 0,
        }
    }

    /// Vertical side moved by this handle: -1 top, 1 bottom, 0 none.
    fn y_side(self) -> i8 {
        match self {
            Self::Sw | Self::S | Self::Se => 1,
            Self::Nw | Self::N | Self::Ne => -1,
            Self::E | Self::W => 0,
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Positions of the eight resize handles on `shape`'s bounding box.
#[must_use]
pub fn handle_positions(shape: &Shape) -> [(ResizeAnchor, Point); 8] {
    let (min, max) = shape.bounds();
    let mid_x = (min.x + max.x) / 2.0;
    let mid_y = (min.y + max.y) / 2.0;
    ResizeAnchor::ALL.map(|anchor| {
        let x = match anchor.x_side() {
            -1 => min.x,
            1 => max.x,
            _ => mid_x,
        };
        let y = match anchor.y_side() {
            -1 => min.y,
            1 => max.y,
            _ => mid_y,
        };
        (anchor, Point::new(x, y))
    })
}

/// Find what is under `p`: a handle of the selected shape first, then the
/// topmost shape body.
#[must_use]
pub fn hit_test(p: Point, shapes: &[Shape], selected_id: Option<ShapeId>) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| shapes.iter().find(|s| s.id() == id)) {
        for (anchor, pos) in handle_positions(selected) {
            if pos.distance(p) <= HANDLE_RADIUS_PX {
                return Some(Hit { shape_id: selected.id(), part: HitPart::ResizeHandle(anchor) });
            }
        }
    }

    shapes
        .iter()
        .rev()
        .find(|s| s.contains(p))
        .map(|s| Hit { shape_id: s.id(), part: HitPart::Body })
}

/// Compute the transient transform produced by dragging `anchor` of
/// `original` to `p`.
///
/// The side opposite the handle stays put. A side dragged past its opposite
/// collapses to zero extent rather than flipping the shape.
#[must_use]
pub fn resize_report(original: &Shape, anchor: ResizeAnchor, p: Point) -> TransformReport {
    let (min, max) = original.bounds();
    let (mut new_min, mut new_max) = (min, max);

    match anchor.x_side() {
        1 => new_max.x = p.x.max(min.x),
        -1 => new_min.x = p.x.min(max.x),
        _ => {}
    }
    match anchor.y_side() {
        1 => new_max.y = p.y.max(min.y),
        -1 => new_min.y = p.y.min(max.y),
        _ => {}
    }

    let scale = |new: f64, old: f64| if old > 0.0 { new / old } else { 1.0 };
    let scale_x = scale(new_max.x - new_min.x, max.x - min.x);
    let scale_y = scale(new_max.y - new_min.y, max.y - min.y);

    let (x, y) = match original {
        Shape::Rectangle { .. } => (new_min.x, new_min.y),
        Shape::Circle { .. } => ((new_min.x + new_max.x) / 2.0, (new_min.y + new_max.y) / 2.0),
    };

    TransformReport { x, y, scale_x, scale_y, rotation: 0.0 }
}
