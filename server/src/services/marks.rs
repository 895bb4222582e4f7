//! Marks service: persists one submission per call.
//!
//! Each submission becomes a single `marks` row holding the configured image
//! name and the coordinate map serialized back to JSON text. Rows are never
//! updated or deleted by the service.

use marks_wire::{Coordinates, MarkRecord};
use sqlx::PgPool;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum MarkError {
    #[error("coordinates could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MarkError {
    /// Short machine-readable tag used in error bodies.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Encode(_) => "encode",
            Self::Database(_) => "database",
        }
    }
}

/// Insert a marks row and return it as stored.
///
/// # Errors
///
/// Returns [`MarkError::Database`] if the insert fails.
pub async fn insert_mark(pool: &PgPool, name: &str, coordinates: &Coordinates) -> Result<MarkRecord, MarkError> {
    let encoded = serde_json::to_string(coordinates)?;
    let (id, name, coordinates_text) = sqlx::query_as::<_, (i64, String, String)>(
        "INSERT INTO marks (name, coordinates) VALUES ($1, $2) RETURNING id, name, coordinates",
    )
    .bind(name)
    .bind(&encoded)
    .fetch_one(pool)
    .await?;

    info!(id, %name, areas = coordinates.len(), "marks saved");
    Ok(MarkRecord { id, name, coordinates: coordinates_text })
}

#[cfg(test)]
#[path = "marks_test.rs"]
mod tests;
