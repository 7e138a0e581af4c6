//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use std::sync::Arc;
use std::time::Duration;

use bullion_core::api::BullionApi;
use bullion_core::catalog::ProductSource;

use crate::config::DEFAULT_RENDER_DEADLINE;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Backend client used by the lead form and the catalog.
    pub api: Arc<dyn BullionApi>,
    /// Where product listings come from.
    pub product_source: ProductSource,
    /// Longest a handler waits on the backend before rendering without it.
    pub render_deadline: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn BullionApi>, product_source: ProductSource) -> Self {
        Self {
            api,
            product_source,
            render_deadline: DEFAULT_RENDER_DEADLINE,
        }
    }

    #[must_use]
    pub fn with_render_deadline(mut self, deadline: Duration) -> Self {
        self.render_deadline = deadline;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("product_source", &self.product_source)
            .field("render_deadline", &self.render_deadline)
            .finish_non_exhaustive()
    }
}
