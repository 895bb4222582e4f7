//! Shape editor for marking areas over a reference image.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing model: translating pointer events into shape creation, selection,
//! drags and resizes, keeping every shape inside the image frame, and
//! deriving the coordinate payload that is sent to the marks service. The
//! host JavaScript layer only wires DOM events to the engine and carries out
//! the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape types and the ordered shape list |
//! | [`frame`] | Image frame placement and coordinate conversions |
//! | [`input`] | Tools, keys, and the gesture state machine |
//! | [`hit`] | Hit-testing and resize-handle geometry |
//! | [`export`] | Shapes to `Area1..N` coordinate payload |
//! | [`submit`] | HTTP client for `POST /api/marks` |
//! | [`render`] | Scene rendering |
//! | [`consts`] | Shared constants (minimum radius, handle sizes, colors) |
//! | `bridge` | `wasm-bindgen` entry points (feature `bridge`) |

#[cfg(feature = "bridge")]
pub mod bridge;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod export;
pub mod frame;
pub mod hit;
pub mod input;
pub mod render;
pub mod submit;
