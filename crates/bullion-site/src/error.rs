//! HTTP error types for the site.
//!
//! Visitors get an HTML page inside the normal site chrome, never a bare
//! status line. Internal details are logged and not shown.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::render::{pages, shell};

/// Error returned from page handlers.
#[derive(Debug)]
pub enum SiteError {
    /// No page at this path.
    NotFound(String),
    /// A background task failed.
    Internal(String),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                shell::page("Page Not Found", &path, &pages::not_found(&path)),
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "page render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    shell::page(
                        "Error",
                        "",
                        &pages::error("Please try again in a moment."),
                    ),
                )
            }
        };
        (status, Html(body)).into_response()
    }
}

impl From<tokio::task::JoinError> for SiteError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(err.to_string())
    }
}
