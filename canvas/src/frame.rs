//! Image frame placement and coordinate conversion.
//!
//! Shapes live in frame space: `(0, 0)` is the image's top-left corner and
//! the frame's width and height bound every committed shape. Pointer events
//! arrive in surface space and are shifted by the frame offset.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// A point in either surface or frame space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Placement of the reference image on the drawing surface.
///
/// `x` / `y` are the image's top-left corner in surface (pointer) pixels.
/// Shape geometry lives in frame space, where `(0, 0)` is that corner and
/// `width` / `height` are the inclusive far edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasFrame {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width: width.max(0.0), height: height.max(0.0) }
    }

    /// Frame covering the whole surface, image centered and scaled to fill it.
    #[must_use]
    pub fn fill_surface(surface_width: f64, surface_height: f64) -> Self {
        let width = surface_width.floor();
        let height = surface_height.floor();
        Self::new((surface_width - width) / 2.0, (surface_height - height) / 2.0, width, height)
    }

    /// Convert a surface-space point to frame coordinates.
    #[must_use]
    pub fn surface_to_frame(&self, surface: Point) -> Point {
        Point { x: surface.x - self.x, y: surface.y - self.y }
    }

    /// Convert a frame-space point to surface coordinates.
    #[must_use]
    pub fn frame_to_surface(&self, frame: Point) -> Point {
        Point { x: frame.x + self.x, y: frame.y + self.y }
    }

    /// Whether a frame-space point lies inside the frame, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Clamp a frame-space point onto the frame.
    #[must_use]
    pub fn clamp_point(&self, p: Point) -> Point {
        Point { x: p.x.clamp(0.0, self.width), y: p.y.clamp(0.0, self.height) }
    }
}

/// Clamp `value` into `[lo, hi]`, preferring `lo` when the range is empty.
///
/// `f64::clamp` panics on `lo > hi`, which happens whenever a shape is larger
/// than the frame it is clamped into.
#[must_use]
pub fn clamp_range(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
