//! JavaScript entry points.
//!
//! The host page builds a [`MarksEditor`] over its `<canvas>`, forwards DOM
//! pointer and keyboard events, and awaits [`MarksEditor::submit`]. The
//! returned promise resolves with the success notification text and rejects
//! with the error notification text.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::engine::{Action, Engine, EngineCore, NotifyLevel};
use crate::frame::Point;
use crate::input::{Button, Key, Tool};
use crate::submit::{DEFAULT_BASE_URL, MarksClient};

/// Route `log` output to the browser console.
///
/// # Errors
///
/// Fails if a logger is already installed.
#[wasm_bindgen]
pub fn init_logging() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Debug).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct MarksEditor {
    engine: Engine,
    client: MarksClient,
}

#[wasm_bindgen]
impl MarksEditor {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, base_url: Option<String>) -> Self {
        console_error_panic_hook::set_once();
        let client = MarksClient::new(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL));
        Self { engine: Engine::new(canvas), client }
    }

    /// Set the reference image once it has loaded.
    pub fn set_image(&mut self, image: HtmlImageElement) -> Result<(), JsValue> {
        let actions = self.engine.set_image(image);
        self.apply(&actions)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let actions = self.engine.set_viewport(width, height);
        self.apply(&actions)
    }

    /// `"rectangle"` or `"circle"`.
    pub fn set_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let tool = match name {
            "rectangle" => Tool::Rectangle,
            "circle" => Tool::Circle,
            other => return Err(JsValue::from_str(&format!("unknown tool `{other}`"))),
        };
        self.engine.set_tool(tool);
        Ok(())
    }

    pub fn set_preview(&mut self, preview: bool) -> Result<(), JsValue> {
        let actions = self.engine.set_preview(preview);
        self.apply(&actions)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_down(Point::new(x, y), dom_button(button));
        self.apply(&actions)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_move(Point::new(x, y));
        self.apply(&actions)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_up(Point::new(x, y), dom_button(button));
        self.apply(&actions)
    }

    pub fn key_down(&mut self, key: String) -> Result<(), JsValue> {
        let actions = self.engine.on_key_down(&Key(key));
        self.apply(&actions)
    }

    pub fn delete_selected(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.delete_selected();
        self.apply(&actions)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.engine.selection().is_some()
    }

    /// Snapshot the shapes and post them to the marks service.
    ///
    /// Editing may continue while the promise is pending.
    pub fn submit(&self) -> Promise {
        let actions = self.engine.prepare_submission();
        let client = self.client.clone();
        future_to_promise(async move {
            for action in actions {
                match action {
                    Action::SubmitRequested(request) => {
                        let result = client.submit(&request).await;
                        return notification(&EngineCore::submission_finished(&result));
                    }
                    Action::Notify { .. } => return notification(&[action]),
                    _ => {}
                }
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.render()
    }
}

impl MarksEditor {
    fn apply(&self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            log::trace!("{action:?}");
        }
        if actions.contains(&Action::RenderNeeded) {
            self.engine.render()?;
        }
        Ok(())
    }
}

/// `MouseEvent.button` code to [`Button`].
fn dom_button(code: i16) -> Button {
    match code {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

fn notification(actions: &[Action]) -> Result<JsValue, JsValue> {
    match actions.first() {
        Some(Action::Notify { level: NotifyLevel::Success, message }) => Ok(JsValue::from_str(message)),
        Some(Action::Notify { level: NotifyLevel::Error, message }) => Err(JsValue::from_str(message)),
        _ => Ok(JsValue::UNDEFINED),
    }
}
