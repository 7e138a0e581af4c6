//! Site configuration.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `BULLION_*` environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use bullion_core::api::{ApiConfig, DEFAULT_BASE_URL};
use bullion_core::catalog::ProductSource;

const DEFAULT_PORT: u16 = 3000;

/// How long a page waits for backend data before rendering without it.
pub const DEFAULT_RENDER_DEADLINE: Duration = Duration::from_millis(1500);

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Backend origin the lead form and catalog talk to.
    pub backend_url: String,
    /// Per-request backend timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Remote catalog or the built-in product list.
    pub product_source: ProductSource,
    /// Longest a page render waits on the catalog and spot price.
    pub render_deadline: Duration,
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `BULLION_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `BULLION_BACKEND_URL`: backend base URL (default: `http://localhost:8001`)
    /// - `BULLION_PRODUCT_SOURCE`: `remote` or `static` (default: `remote`)
    /// - `BULLION_REQUEST_TIMEOUT_SECS`: backend request timeout (default: none)
    /// - `BULLION_RENDER_DEADLINE_MS`: wait for backend data per page (default: `1500`)
    /// - `BULLION_LOG_LEVEL`: log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fallback = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));
        // BULLION_BIND_ADDR > PORT > default
        let bind_addr = if let Some(addr) = lookup("BULLION_BIND_ADDR") {
            addr.parse().unwrap_or(fallback)
        } else if let Some(port) = lookup("PORT") {
            SocketAddr::from(([0, 0, 0, 0], port.parse().unwrap_or(DEFAULT_PORT)))
        } else {
            fallback
        };

        let backend_url = lookup("BULLION_BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let request_timeout = lookup("BULLION_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let product_source = lookup("BULLION_PRODUCT_SOURCE")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let render_deadline = lookup("BULLION_RENDER_DEADLINE_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map_or(DEFAULT_RENDER_DEADLINE, Duration::from_millis);

        let log_level = lookup("BULLION_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        Self {
            bind_addr,
            backend_url,
            request_timeout,
            product_source,
            render_deadline,
            log_level,
        }
    }

    /// Backend client settings derived from this config.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.backend_url.clone(),
            timeout: self.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> SiteConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.product_source, ProductSource::Remote);
        assert_eq!(config.render_deadline, DEFAULT_RENDER_DEADLINE);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn bind_addr_overrides_port() {
        let config = load(&[("PORT", "8080"), ("BULLION_BIND_ADDR", "127.0.0.1:9000")]);
        assert_eq!(config.bind_addr.port(), 9000);

        let config = load(&[("PORT", "8080")]);
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn backend_and_source() {
        let config = load(&[
            ("BULLION_BACKEND_URL", "https://api.rockinternationalbullion.com"),
            ("BULLION_PRODUCT_SOURCE", "static"),
            ("BULLION_REQUEST_TIMEOUT_SECS", "15"),
            ("BULLION_RENDER_DEADLINE_MS", "250"),
        ]);
        assert_eq!(config.product_source, ProductSource::Static);
        assert_eq!(config.render_deadline, Duration::from_millis(250));
        let api = config.api_config();
        assert_eq!(api.base_url, "https://api.rockinternationalbullion.com");
        assert_eq!(api.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn garbage_falls_back() {
        let config = load(&[
            ("BULLION_BIND_ADDR", "not-an-addr"),
            ("BULLION_PRODUCT_SOURCE", "mongo"),
            ("BULLION_REQUEST_TIMEOUT_SECS", "soon"),
            ("BULLION_BACKEND_URL", "   "),
        ]);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.product_source, ProductSource::Remote);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.backend_url, DEFAULT_BASE_URL);
    }
}
