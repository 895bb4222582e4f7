//! HTTP client for the marks service.
//!
//! The editor never calls this itself: `EngineCore::prepare_submission`
//! returns a snapshot payload and the host decides when to send it. A
//! pending submission therefore never blocks editing, and whatever the
//! outcome the shape list is left as it was.
//!
//! ERROR HANDLING
//! ==============
//! There is no retry and no timeout. Transport failures and non-2xx
//! responses come back as [`SubmitError`] for the host to show as a
//! notification.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use marks_wire::{ErrorResponse, MARKS_PATH, MarksRequest, MarksResponse};

/// Base URL of the marks service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Message shown for any failed submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred while submitting the coordinates.";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a usable response.
    #[error("submission transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Client for `POST /api/marks`.
#[derive(Debug, Clone)]
pub struct MarksClient {
    base_url: String,
    http: reqwest::Client,
}

impl MarksClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), http: reqwest::Client::new() }
    }

    /// Full URL of the marks endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{MARKS_PATH}", self.base_url)
    }

    /// Submit a payload and return the service's acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] on network or decode failure and
    /// [`SubmitError::Rejected`] on a non-2xx status.
    pub async fn submit(&self, request: &MarksRequest) -> Result<MarksResponse, SubmitError> {
        log::debug!("submitting {} area(s) to {}", request.coordinates.len(), self.endpoint());
        let resp = self.http.post(self.endpoint()).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            let message = rejection_message(&body);
            log::warn!("marks submission rejected: status={status} message={message}");
            return Err(SubmitError::Rejected { status: status.as_u16(), message });
        }

        let ack = resp.json::<MarksResponse>().await?;
        log::info!("marks saved: id={} message={}", ack.data.id, ack.message);
        Ok(ack)
    }
}

impl Default for MarksClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Best-effort message from an error body: the service's `message` field
/// when the body parses, otherwise the raw text.
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_owned(),
        Err(_) => body.trim().to_owned(),
    }
}
