// catalog/config.rs - Remote catalog configuration
//
// Use the builder methods to customize the loader, or `from_env` to read
// CATALOG_API_URL / CATALOG_LIMIT / CATALOG_TIMEOUT_SECS (a .env file is
// honoured when the `fetch` feature is enabled).

use std::time::Duration;

/// Default remote endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";
/// Default number of items requested from the endpoint.
pub const DEFAULT_LIMIT: u32 = 10;
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_ENDPOINT: &str = "CATALOG_API_URL";
pub const ENV_LIMIT: &str = "CATALOG_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";

/// Where and how to fetch the remote catalog.
///
/// The limit bounds the request only; it is not expected to match the size
/// of the fallback catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub(crate) endpoint: String,
    pub(crate) limit: u32,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) use_system_proxy: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("catalog_browser/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL (without the `limit` query parameter).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Ignore HTTP(S)_PROXY settings, e.g. for loopback endpoints.
    #[must_use]
    pub const fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build a configuration from the process environment.
    #[cfg(feature = "fetch")]
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers keep the default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_LIMIT) {
            match raw.trim().parse::<u32>() {
                Ok(limit) => config.limit = limit,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", ENV_LIMIT, raw, e),
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", ENV_TIMEOUT_SECS, raw, e),
            }
        }

        tracing::debug!(
            "Catalog config: endpoint={}, limit={}, timeout={:?}",
            config.endpoint,
            config.limit,
            config.timeout
        );
        config
    }
}
