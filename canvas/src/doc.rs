//! Document model: shapes and the ordered list that owns them.
//!
//! A `Shape` is either a corner-anchored rectangle or a center-anchored
//! circle, both in frame space. `ShapeList` keeps committed shapes in
//! creation order, which is also draw order and export order, and hands out
//! monotonically increasing ids.
//!
//! Selection is not stored here. The engine tracks a single selected id so
//! that "at most one selected shape" cannot be violated by construction.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frame::{CanvasFrame, Point, clamp_range};

/// Unique identifier for a shape, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// A marked area over the reference image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rectangle {
        #[serde(default)]
        id: ShapeId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Circle anchored at its center.
    Circle {
        #[serde(default)]
        id: ShapeId,
        x: f64,
        y: f64,
        radius: f64,
    },
}

impl Shape {
    /// A zero-extent shape of `kind` anchored at `at`.
    #[must_use]
    pub fn empty(kind: ShapeKind, id: ShapeId, at: Point) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Rectangle { id, x: at.x, y: at.y, width: 0.0, height: 0.0 },
            ShapeKind::Circle => Self::Circle { id, x: at.x, y: at.y, radius: 0.0 },
        }
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        match self {
            Self::Rectangle { id, .. } | Self::Circle { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Anchor point: top-left corner for rectangles, center for circles.
    #[must_use]
    pub fn origin(&self) -> Point {
        match *self {
            Self::Rectangle { x, y, .. } | Self::Circle { x, y, .. } => Point::new(x, y),
        }
    }

    pub fn set_origin(&mut self, p: Point) {
        match self {
            Self::Rectangle { x, y, .. } | Self::Circle { x, y, .. } => {
                *x = p.x;
                *y = p.y;
            }
        }
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> (Point, Point) {
        match *self {
            Self::Rectangle { x, y, width, height, .. } => (Point::new(x, y), Point::new(x + width, y + height)),
            Self::Circle { x, y, radius, .. } => {
                (Point::new(x - radius, y - radius), Point::new(x + radius, y + radius))
            }
        }
    }

    /// Whether `p` lies on or inside the shape.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Self::Rectangle { x, y, width, height, .. } => {
                p.x >= x && p.x <= x + width && p.y >= y && p.y <= y + height
            }
            Self::Circle { x, y, radius, .. } => Point::new(x, y).distance(p) <= radius,
        }
    }

    /// Whether the shape encloses no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Self::Rectangle { width, height, .. } => width <= 0.0 || height <= 0.0,
            Self::Circle { radius, .. } => radius <= 0.0,
        }
    }

    /// Move the shape so it lies fully inside `frame`, keeping its size.
    ///
    /// Rectangles clamp their corner to `[0, frame - size]`; circles clamp
    /// their center to `[radius, frame - radius]`.
    pub fn clamp_position(&mut self, frame: &CanvasFrame) {
        match self {
            Self::Rectangle { x, y, width, height, .. } => {
                *x = clamp_range(*x, 0.0, frame.width - *width);
                *y = clamp_range(*y, 0.0, frame.height - *height);
            }
            Self::Circle { x, y, radius, .. } => {
                *x = clamp_range(*x, *radius, frame.width - *radius);
                *y = clamp_range(*y, *radius, frame.height - *radius);
            }
        }
    }

    /// Whether the shape lies fully inside `frame`, edges included.
    #[must_use]
    pub fn within(&self, frame: &CanvasFrame) -> bool {
        let (min, max) = self.bounds();
        frame.contains(min) && frame.contains(max)
    }
}

/// Committed shapes in creation order.
#[derive(Debug, Clone)]
pub struct ShapeList {
    shapes: Vec<Shape>,
    last_id: u64,
}

impl ShapeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new(), last_id: 0 }
    }

    /// Reserve the next id. Ids are never reused within a session.
    pub fn next_id(&mut self) -> ShapeId {
        self.last_id += 1;
        ShapeId(self.last_id)
    }

    /// Append a shape. The caller is responsible for its id being fresh.
    pub fn push(&mut self, shape: Shape) {
        self.last_id = self.last_id.max(shape.id().0);
        self.shapes.push(shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let idx = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Replace the contents, assigning fresh ids in order.
    pub fn load(&mut self, shapes: Vec<Shape>) {
        self.shapes.clear();
        for mut shape in shapes {
            let id = self.next_id();
            match &mut shape {
                Shape::Rectangle { id: slot, .. } | Shape::Circle { id: slot, .. } => *slot = id,
            }
            self.shapes.push(shape);
        }
    }

    /// Shapes in creation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeList {
    fn default() -> Self {
        Self::new()
    }
}
