use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "TOURFRIEND_API_BASE_URL";

/// Settings for the listing data layer, passed to [`crate::ListingClient`]
/// at construction.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// API host, without a trailing path.
    pub base_url: String,
    /// A cached listing younger than this is served without a request.
    pub stale_time: Duration,
    /// Cached listings older than this are dropped.
    pub cache_time: Duration,
    /// Retries after the first attempt on transient failures.
    pub retries: u32,
    pub min_retry_interval: Duration,
    pub max_retry_interval: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stale_time: Duration::from_secs(5 * 60),
            cache_time: Duration::from_secs(10 * 60),
            retries: 3,
            min_retry_interval: Duration::from_secs(1),
            max_retry_interval: Duration::from_secs(30),
        }
    }
}

impl QueryConfig {
    /// Defaults, with the base URL taken from `TOURFRIEND_API_BASE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn without_retries(mut self) -> Self {
        self.retries = 0;
        self
    }

    /// Joins an absolute API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
