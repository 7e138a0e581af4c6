//! Client for the bullion backend.
//!
//! [`BullionApi`] is the seam between page logic and the network: the lead
//! form controller and the catalog fetchers only ever see the trait, so they
//! run unchanged against [`HttpApi`] in production and against
//! [`StubApi`](crate::stub::StubApi) in tests.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{HealthStatus, LeadForm, LeadReceipt, Product, ProductList, SpotPrice};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Backend client configuration, injected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://api.example.com`. Trailing slashes are
    /// ignored.
    pub base_url: String,
    /// Per-request timeout. `None` means requests may wait indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }
}

/// Operations the site consumes from the backend.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait BullionApi: Send + Sync + 'static {
    /// `POST /api/leads` with the lead as a JSON body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] for a non-2xx status, a transport variant if
    /// the request never completed.
    async fn submit_lead(&self, lead: &LeadForm) -> Result<LeadReceipt, ApiError>;

    /// `GET /api/products`, in the order the backend returns them.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; callers treat every failure as "no products".
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /api/spot-price`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; callers treat every failure as "no price".
    async fn spot_price(&self) -> Result<SpotPrice, ApiError>;

    /// `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// reqwest-backed [`BullionApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not an `http(s)` URL,
    /// or [`ApiError::Transport`] if the TLS stack cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "backend url must start with http:// or https://, got '{base_url}'"
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("bullion-site/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Transport)?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
        })
    }

    /// The normalised backend origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
}

#[async_trait::async_trait]
impl BullionApi for HttpApi {
    async fn submit_lead(&self, lead: &LeadForm) -> Result<LeadReceipt, ApiError> {
        // `.json()` sets `Content-Type: application/json`.
        let resp = self
            .client
            .post(self.url("/api/leads"))
            .json(lead)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let list: ProductList = self.get("/api/products").await?;
        Ok(list.products)
    }

    async fn spot_price(&self) -> Result<SpotPrice, ApiError> {
        self.get("/api/spot-price").await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/api/health").await
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_connect() {
        ApiError::Unreachable(err.to_string())
    } else {
        ApiError::Transport(err)
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();

    if !status.is_success() {
        // The body is only logged; a failed read still counts as a rejection.
        let text = resp.text().await.unwrap_or_default();
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            body: truncate_body(text, status),
        });
    }

    let text = resp.text().await.map_err(transport)?;
    serde_json::from_str(&text).map_err(ApiError::Decode)
}

/// Error bodies are only logged; cap them so an HTML error page does not
/// flood the log line.
fn truncate_body(mut body: String, status: StatusCode) -> String {
    const MAX: usize = 512;
    if body.len() > MAX {
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push_str("...");
    }
    if body.is_empty() {
        body = status.canonical_reason().unwrap_or("no body").to_owned();
    }
    body
}
