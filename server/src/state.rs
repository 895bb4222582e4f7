//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and the name recorded on every stored mark.

use std::sync::Arc;

use sqlx::PgPool;

/// Clone is required by Axum; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub image_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, image_name: &str) -> Self {
        Self { pool, image_name: Arc::from(image_name) }
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
