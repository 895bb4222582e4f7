//! `POST /api/marks`: store one coordinate submission.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use marks_wire::{ErrorResponse, MarksRequest, MarksResponse, SAVE_FAILED_MESSAGE, SAVED_MESSAGE};
use tracing::error;

use crate::services::marks::{self, MarkError};
use crate::state::AppState;

/// Persist the submitted coordinates under the configured image name.
///
/// Bodies that do not decode as [`MarksRequest`] are rejected by the `Json`
/// extractor before this handler runs.
pub async fn create_mark(
    State(state): State<AppState>,
    Json(body): Json<MarksRequest>,
) -> Result<Json<MarksResponse>, (StatusCode, Json<ErrorResponse>)> {
    let data = marks::insert_mark(&state.pool, &state.image_name, &body.coordinates)
        .await
        .map_err(|e| {
            error!(error = %e, "saving marks failed");
            mark_error_response(&e)
        })?;
    Ok(Json(MarksResponse { message: SAVED_MESSAGE.to_owned(), data }))
}

pub(crate) fn mark_error_response(err: &MarkError) -> (StatusCode, Json<ErrorResponse>) {
    let body = ErrorResponse {
        message: SAVE_FAILED_MESSAGE.to_owned(),
        error: serde_json::json!({ "kind": err.kind(), "detail": err.to_string() }),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}

#[cfg(test)]
#[path = "marks_test.rs"]
mod tests;
