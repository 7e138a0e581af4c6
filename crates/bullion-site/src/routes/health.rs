//! Liveness probe.
//!
//! Always answers 200 while the site is up. The `backend` field reports
//! whether the backend answered its own health check within the render
//! deadline; the site still serves pages when it did not.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// `GET /healthz` body.
#[derive(Debug, Serialize)]
pub struct SiteHealth {
    pub status: &'static str,
    pub service: &'static str,
    /// `ok` or `unreachable`.
    pub backend: &'static str,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<SiteHealth> {
    let backend = match tokio::time::timeout(state.render_deadline, state.api.health()).await {
        Ok(Ok(_)) => "ok",
        Ok(Err(e)) => {
            warn!(error = %e, "backend health check failed");
            "unreachable"
        }
        Err(_) => {
            warn!("backend health check timed out");
            "unreachable"
        }
    };
    Json(SiteHealth {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        backend,
    })
}
