//! Rendering: draws the editor scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine and produces pixels; it does
//! not mutate any editor state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{HANDLE_FILL, HANDLE_RADIUS_PX, SELECTED_STROKE, SHAPE_STROKE, STROKE_WIDTH_PX};
use crate::doc::Shape;
use crate::engine::EngineCore;
use crate::hit::handle_positions;

/// Draw the full scene: reference image, shapes, draft, and selection handles.
///
/// In preview mode every shape is drawn in the plain stroke and no handles
/// are shown.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    image: Option<&HtmlImageElement>,
    surface_w: f64,
    surface_h: f64,
) -> Result<(), JsValue> {
    let frame = core.frame;
    ctx.clear_rect(0.0, 0.0, surface_w, surface_h);

    if let Some(image) = image {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, frame.x, frame.y, frame.width, frame.height)?;
    }

    ctx.save();
    ctx.translate(frame.x, frame.y)?;
    ctx.set_line_width(STROKE_WIDTH_PX);

    let preview = core.ui.preview;
    let shapes = core.displayed_shapes();
    for shape in &shapes {
        let selected = !preview && core.is_selected(shape.id());
        draw_shape(ctx, shape, if selected { SELECTED_STROKE } else { SHAPE_STROKE })?;
    }

    if let Some(draft) = core.draft() {
        draw_shape(ctx, draft, SHAPE_STROKE)?;
    }

    if !preview {
        if let Some(selected) = shapes.iter().find(|s| core.is_selected(s.id())) {
            draw_handles(ctx, selected)?;
        }
    }

    ctx.restore();
    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, stroke: &str) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(stroke);
    match *shape {
        Shape::Rectangle { x, y, width, height, .. } => ctx.stroke_rect(x, y, width, height),
        Shape::Circle { x, y, radius, .. } => {
            ctx.begin_path();
            ctx.arc(x, y, radius, 0.0, 2.0 * PI)?;
            ctx.stroke();
        }
    }
    Ok(())
}

fn draw_handles(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    let (min, max) = shape.bounds();
    ctx.set_stroke_style_str(SELECTED_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(min.x, min.y, max.x - min.x, max.y - min.y);

    ctx.set_fill_style_str(HANDLE_FILL);
    let size = HANDLE_RADIUS_PX * 1.5;
    for (_, pos) in handle_positions(shape) {
        ctx.fill_rect(pos.x - size / 2.0, pos.y - size / 2.0, size, size);
        ctx.stroke_rect(pos.x - size / 2.0, pos.y - size / 2.0, size, size);
    }
    Ok(())
}
