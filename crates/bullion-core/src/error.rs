//! Error types for the backend client.

/// How a failed request is presented to a visitor.
///
/// The lead form shows one fixed message per kind; the distinction between
/// the underlying causes is kept only for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend answered with a non-2xx status.
    ServerRejected,
    /// The request never completed into a usable response.
    TransportFailed,
}

/// All errors that can occur when talking to the bullion backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The client could not be constructed from its configuration.
    #[error("backend config error: {0}")]
    Config(String),

    /// Backend returned a non-2xx status.
    #[error("backend rejected request with {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics only.
        body: String,
    },

    /// Request timed out. Only possible when a timeout is configured.
    #[error("backend request timed out")]
    Timeout,

    /// The backend could not be reached at all (connection refused, DNS).
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// Connection reset or any other transport error.
    #[error("backend network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body was not the expected JSON shape.
    #[error("backend json error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify this error for presentation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected { .. } => FailureKind::ServerRejected,
            Self::Config(_)
            | Self::Timeout
            | Self::Unreachable(_)
            | Self::Transport(_)
            | Self::Decode(_) => FailureKind::TransportFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_is_server_side() {
        let err = ApiError::Rejected {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.kind(), FailureKind::ServerRejected);
    }

    #[test]
    fn decode_counts_as_transport() {
        let Err(json) = serde_json::from_str::<serde_json::Value>("<html>") else {
            unreachable!("html is not json");
        };
        assert_eq!(ApiError::Decode(json).kind(), FailureKind::TransportFailed);
        assert_eq!(ApiError::Timeout.kind(), FailureKind::TransportFailed);
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Rejected {
            status: 422,
            body: "bad email".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "backend rejected request with 422: bad email"
        );
    }
}
