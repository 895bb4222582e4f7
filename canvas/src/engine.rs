//! Shape editor engine.
//!
//! DESIGN
//! ======
//! `EngineCore` owns every piece of editor state: the committed shapes, the
//! canvas frame, the UI state (tool, selection, preview) and the active
//! gesture. It is mutated only through the operations below, each of which
//! returns the [`Action`]s the host must carry out. No operation performs
//! I/O; submission is handed to the host as [`Action::SubmitRequested`].
//!
//! `Engine` wraps the core together with the browser canvas element and the
//! reference image, and is the only type that touches the DOM.
//!
//! Gestures are exclusive. Drawing, dragging and transforming each start
//! only from `InputState::Idle`, and selection changes and deletion are
//! likewise refused while a gesture is in flight.

use marks_wire::{MarksRequest, MarksResponse};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{CLICK_SLOP_PX, MIN_CIRCLE_RADIUS};
use crate::doc::{Shape, ShapeId, ShapeList};
use crate::export::export;
use crate::frame::{CanvasFrame, Point, clamp_range};
use crate::hit::{HitPart, ResizeAnchor, hit_test, resize_report};
use crate::input::{Button, InputState, Key, Tool, TransformReport, UiState};
use crate::render;
use crate::submit::{SUBMIT_FAILED_MESSAGE, SubmitError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
}

/// Actions returned from engine operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A draft was committed to the shape list.
    ShapeCreated(Shape),
    /// A committed shape changed geometry.
    ShapeUpdated(Shape),
    ShapeDeleted { id: ShapeId },
    SelectionChanged(Option<ShapeId>),
    /// Show a toast-style notification.
    Notify { level: NotifyLevel, message: String },
    /// Send this payload to the marks service.
    SubmitRequested(MarksRequest),
    RenderNeeded,
}

/// Derive the canonical shape from a transform manipulation.
///
/// Rectangles take the reported corner and scaled size, then clip both
/// edges to the frame, so an edge the pointer did not move stays put. Circles scale uniformly by
/// the limiting axis, never shrink below [`MIN_CIRCLE_RADIUS`], and are then
/// clamped like a drag. Rotation is not part of the model and is dropped.
#[must_use]
pub fn normalize_transform(original: &Shape, report: &TransformReport, frame: &CanvasFrame) -> Shape {
    if report.rotation != 0.0 {
        log::debug!("discarding rotation of {} degrees on {}", report.rotation, original.id());
    }
    match *original {
        Shape::Rectangle { id, width, height, .. } => {
            let far_x = report.x + (width * report.scale_x).max(0.0);
            let far_y = report.y + (height * report.scale_y).max(0.0);
            let x = clamp_range(report.x, 0.0, frame.width);
            let y = clamp_range(report.y, 0.0, frame.height);
            Shape::Rectangle {
                id,
                x,
                y,
                width: (far_x.min(frame.width) - x).max(0.0),
                height: (far_y.min(frame.height) - y).max(0.0),
            }
        }
        Shape::Circle { id, radius, .. } => {
            let max_radius = frame.width.min(frame.height) / 2.0;
            let scaled = radius * report.scale_x.min(report.scale_y);
            let mut shape = Shape::Circle {
                id,
                x: report.x,
                y: report.y,
                radius: scaled.min(max_radius).max(MIN_CIRCLE_RADIUS),
            };
            shape.clamp_position(frame);
            shape
        }
    }
}

/// Editor state and logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub shapes: ShapeList,
    pub frame: CanvasFrame,
    pub ui: UiState,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Configuration ---

    /// Set the active drawing tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Place the reference image. Shapes that no longer fit are moved back
    /// inside.
    pub fn set_frame(&mut self, frame: CanvasFrame) -> Vec<Action> {
        self.frame = frame;
        let mut actions = Vec::new();
        let ids: Vec<ShapeId> = self.shapes.iter().map(Shape::id).collect();
        for id in ids {
            if let Some(shape) = self.shapes.get_mut(id) {
                let before = *shape;
                shape.clamp_position(&frame);
                if *shape != before {
                    actions.push(Action::ShapeUpdated(*shape));
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Toggle the read-only preview. Entering preview abandons any gesture.
    pub fn set_preview(&mut self, preview: bool) -> Vec<Action> {
        let mut actions = if preview { self.cancel() } else { Vec::new() };
        self.ui.preview = preview;
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Drawing ---

    /// Start drawing a zero-extent shape of the current tool at `p`.
    pub fn begin_draw(&mut self, p: Point) -> Vec<Action> {
        if !self.input.is_idle() || self.ui.preview {
            return Vec::new();
        }
        let anchor = self.frame.clamp_point(p);
        let id = self.shapes.next_id();
        let draft = Shape::empty(self.ui.tool.shape_kind(), id, anchor);
        self.input = InputState::Drawing { draft, anchor };
        vec![Action::RenderNeeded]
    }

    /// Stretch the draft from its anchor to `p`.
    ///
    /// Rectangles normalize so the drag direction does not matter; circles
    /// use the anchor as center and never reach past the nearest frame edge.
    pub fn update_draft(&mut self, p: Point) -> Vec<Action> {
        let frame = self.frame;
        let InputState::Drawing { draft, anchor } = &mut self.input else {
            return Vec::new();
        };
        let a = *anchor;
        match draft {
            Shape::Rectangle { x, y, width, height, .. } => {
                let q = frame.clamp_point(p);
                *x = a.x.min(q.x);
                *y = a.y.min(q.y);
                *width = (q.x - a.x).abs();
                *height = (q.y - a.y).abs();
            }
            Shape::Circle { radius, .. } => {
                let room = a.x.min(frame.width - a.x).min(a.y).min(frame.height - a.y).max(0.0);
                *radius = a.distance(p).max(0.0).min(room);
            }
        }
        vec![Action::RenderNeeded]
    }

    /// Append the draft to the shape list unchanged.
    pub fn commit_draft(&mut self) -> Vec<Action> {
        let InputState::Drawing { draft, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        self.shapes.push(draft);
        log::debug!("committed {:?} {}", draft.kind(), draft.id());
        vec![Action::ShapeCreated(draft), Action::RenderNeeded]
    }

    // --- Selection ---

    /// Toggle selection of `id`. Selecting one shape deselects any other.
    pub fn select(&mut self, id: ShapeId) -> Vec<Action> {
        if !self.input.is_idle() || self.shapes.get(id).is_none() {
            return Vec::new();
        }
        let next = if self.ui.selected_id == Some(id) { None } else { Some(id) };
        self.ui.selected_id = next;
        vec![Action::SelectionChanged(next), Action::RenderNeeded]
    }

    /// Drop the current selection, if any.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if !self.input.is_idle() || self.ui.selected_id.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// Remove the selected shape. No-op without a selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if !self.input.is_idle() || self.ui.preview {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id.take() else {
            return Vec::new();
        };
        self.shapes.remove(id);
        vec![Action::ShapeDeleted { id }, Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Dragging ---

    /// Grab shape `id` at `p`.
    pub fn begin_drag(&mut self, id: ShapeId, p: Point) -> Vec<Action> {
        if !self.input.is_idle() || self.ui.preview {
            return Vec::new();
        }
        let Some(shape) = self.shapes.get(id) else {
            return Vec::new();
        };
        let origin = shape.origin();
        self.input = InputState::Dragging {
            id,
            grab_offset: Point::new(p.x - origin.x, p.y - origin.y),
            start: p,
            original: *shape,
            moved: false,
        };
        vec![Action::RenderNeeded]
    }

    /// Move the grabbed shape with the pointer. Bounds are enforced on release.
    pub fn drag_to(&mut self, p: Point) -> Vec<Action> {
        let InputState::Dragging { id, grab_offset, start, moved, .. } = &mut self.input else {
            return Vec::new();
        };
        if !*moved && start.distance(p) <= CLICK_SLOP_PX {
            return Vec::new();
        }
        *moved = true;
        let target = Point::new(p.x - grab_offset.x, p.y - grab_offset.y);
        match self.shapes.get_mut(*id) {
            Some(shape) => {
                shape.set_origin(target);
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// Release the grabbed shape at `p`, clamping it into the frame.
    ///
    /// A press and release that never left the click slop selects instead.
    pub fn end_drag(&mut self, p: Point) -> Vec<Action> {
        let mut actions = self.drag_to(p);
        let InputState::Dragging { id, moved, .. } = std::mem::take(&mut self.input) else {
            return actions;
        };
        if !moved {
            return self.select(id);
        }
        let frame = self.frame;
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.clamp_position(&frame);
            actions.push(Action::ShapeUpdated(*shape));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Transforming ---

    /// Start resizing the selected shape, optionally through one of its handles.
    pub fn begin_transform(&mut self, id: ShapeId, handle: Option<ResizeAnchor>) -> Vec<Action> {
        if !self.input.is_idle() || self.ui.preview || self.ui.selected_id != Some(id) {
            return Vec::new();
        }
        let Some(shape) = self.shapes.get(id) else {
            return Vec::new();
        };
        self.input = InputState::Transforming {
            id,
            handle,
            original: *shape,
            report: TransformReport::identity(shape),
        };
        vec![Action::RenderNeeded]
    }

    /// Drag the active handle to `p`, updating the transient manipulation.
    pub fn transform_to(&mut self, p: Point) -> Vec<Action> {
        let InputState::Transforming { handle: Some(handle), original, report, .. } = &mut self.input else {
            return Vec::new();
        };
        *report = resize_report(original, *handle, p);
        vec![Action::RenderNeeded]
    }

    /// Commit a manipulation into the shape's canonical attributes.
    ///
    /// The report is consumed here; nothing of it survives on the shape, so
    /// a second identical report scales the new canonical size again.
    pub fn end_transform(&mut self, report: TransformReport) -> Vec<Action> {
        let InputState::Transforming { id, original, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        let normalized = normalize_transform(&original, &report, &self.frame);
        match self.shapes.get_mut(id) {
            Some(shape) => {
                *shape = normalized;
                vec![Action::ShapeUpdated(normalized), Action::RenderNeeded]
            }
            None => vec![Action::RenderNeeded],
        }
    }

    /// The live preview of the shape being transformed, if any.
    #[must_use]
    pub fn transform_preview(&self) -> Option<Shape> {
        match &self.input {
            InputState::Transforming { original, report, .. } => {
                Some(normalize_transform(original, report, &self.frame))
            }
            _ => None,
        }
    }

    // --- Cancel ---

    /// Abort the active gesture: drop the draft, or put a dragged or
    /// transformed shape back where it was.
    pub fn cancel(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { .. } => vec![Action::RenderNeeded],
            InputState::Dragging { id, original, .. } | InputState::Transforming { id, original, .. } => {
                if let Some(shape) = self.shapes.get_mut(id) {
                    *shape = original;
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    // --- Submission ---

    /// Snapshot the shapes into a submission payload.
    ///
    /// With nothing to submit the host gets an error notification instead and
    /// must not contact the service.
    pub fn prepare_submission(&self) -> Vec<Action> {
        match export(self.shapes.as_slice()) {
            Ok(coordinates) => vec![Action::SubmitRequested(MarksRequest { coordinates })],
            Err(e) => {
                log::warn!("submission aborted: {e}");
                vec![Action::Notify { level: NotifyLevel::Error, message: e.to_string() }]
            }
        }
    }

    /// Turn a finished submission into a notification. Shapes are untouched.
    #[must_use]
    pub fn submission_finished(result: &Result<MarksResponse, SubmitError>) -> Vec<Action> {
        let action = match result {
            Ok(ack) => Action::Notify { level: NotifyLevel::Success, message: ack.message.clone() },
            Err(e) => {
                log::error!("submission failed: {e}");
                Action::Notify { level: NotifyLevel::Error, message: SUBMIT_FAILED_MESSAGE.to_owned() }
            }
        };
        vec![action]
    }

    // --- Input events ---

    /// Route a pointer-down in surface coordinates to the matching gesture.
    pub fn on_pointer_down(&mut self, surface: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.ui.preview || !self.input.is_idle() {
            return Vec::new();
        }
        let p = self.frame.surface_to_frame(surface);
        match hit_test(p, self.shapes.as_slice(), self.ui.selected_id) {
            Some(hit) => match hit.part {
                HitPart::ResizeHandle(anchor) => self.begin_transform(hit.shape_id, Some(anchor)),
                HitPart::Body => self.begin_drag(hit.shape_id, p),
            },
            None => {
                let mut actions = self.clear_selection();
                if self.frame.contains(p) {
                    actions.extend(self.begin_draw(p));
                }
                actions
            }
        }
    }

    pub fn on_pointer_move(&mut self, surface: Point) -> Vec<Action> {
        let p = self.frame.surface_to_frame(surface);
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { .. } => self.update_draft(p),
            InputState::Dragging { .. } => self.drag_to(p),
            InputState::Transforming { .. } => self.transform_to(p),
        }
    }

    pub fn on_pointer_up(&mut self, surface: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let p = self.frame.surface_to_frame(surface);
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { .. } => {
                let mut actions = self.update_draft(p);
                actions.extend(self.commit_draft());
                actions
            }
            InputState::Dragging { .. } => self.end_drag(p),
            InputState::Transforming { .. } => {
                self.transform_to(p);
                match self.input {
                    InputState::Transforming { report, .. } => self.end_transform(report),
                    _ => Vec::new(),
                }
            }
        }
    }

    /// `Delete` / `Backspace` remove the selection; `Escape` aborts the gesture.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            "Escape" => self.cancel(),
            _ => Vec::new(),
        }
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.ui.selected_id == Some(id)
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// The in-progress draft, if drawing.
    #[must_use]
    pub fn draft(&self) -> Option<&Shape> {
        self.input.draft()
    }

    /// Committed shapes as they should appear right now, in draw order.
    ///
    /// The shape under an active transform is replaced by its preview.
    #[must_use]
    pub fn displayed_shapes(&self) -> Vec<Shape> {
        let preview = self.transform_preview();
        self.shapes
            .iter()
            .map(|s| match preview {
                Some(p) if p.id() == s.id() => p,
                _ => *s,
            })
            .collect()
    }
}

/// The full editor. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, image: None, core: EngineCore::new() }
    }

    /// Set the reference image drawn under the shapes.
    pub fn set_image(&mut self, image: HtmlImageElement) -> Vec<Action> {
        self.image = Some(image);
        vec![Action::RenderNeeded]
    }

    /// Resize the drawing surface and stretch the image frame over it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) -> Vec<Action> {
        self.canvas.set_width(width_css.max(0.0) as u32);
        self.canvas.set_height(height_css.max(0.0) as u32);
        self.core.set_frame(CanvasFrame::fill_surface(width_css, height_css))
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_preview(&mut self, preview: bool) -> Vec<Action> {
        self.core.set_preview(preview)
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        self.core.delete_selected()
    }

    pub fn prepare_submission(&self) -> Vec<Action> {
        self.core.prepare_submission()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, surface: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(surface, button)
    }

    pub fn on_pointer_move(&mut self, surface: Point) -> Vec<Action> {
        self.core.on_pointer_move(surface)
    }

    pub fn on_pointer_up(&mut self, surface: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(surface, button)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("canvas context is not 2d"))?;
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw(&ctx, &self.core, self.image.as_ref(), width, height)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.core.selection()
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.core.shape(id)
    }
}
