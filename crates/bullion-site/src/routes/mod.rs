//! HTTP routes for the site.
//!
//! [`build_router`] wires every page, the lead form and the health probe
//! together with tracing and the security headers.

pub mod contact;
pub mod health;
pub mod pages;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Maximum lead submissions processed at once.
const CONTACT_CONCURRENCY: usize = 16;

/// Build the full router for `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Concurrency-limit the lead form so a burst cannot fan out to the backend.
    let contact_routes =
        contact::router().layer(tower::limit::ConcurrencyLimitLayer::new(CONTACT_CONCURRENCY));

    Router::new()
        .merge(pages::router())
        .merge(contact_routes)
        .merge(health::router())
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}
