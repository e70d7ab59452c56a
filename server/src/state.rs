//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and the optional owner notifier; there is no
//! in-memory mutable state, so every request is an independent query.

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::notify::ContactNotifier;

/// Clone is required by Axum; the pool and notifier are both cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// `None` when owner notification is not configured.
    pub notifier: Option<Arc<dyn ContactNotifier>>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, notifier: Option<Arc<dyn ContactNotifier>>) -> Self {
        Self { pool, notifier }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
