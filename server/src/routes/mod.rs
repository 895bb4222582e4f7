//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the marks API and the health probe under a single Axum
//! router. CORS is open to any origin so the editor can be served from a
//! different host than the service.

pub mod marks;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use marks_wire::MARKS_PATH;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(MARKS_PATH, post(marks::create_mark))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
