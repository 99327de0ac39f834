use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tourfriend_shared::{Destination, TourPackage};
use tracing::{debug, warn};

use crate::cache::{ListingKey, QueryCache};
use crate::config::QueryConfig;
use crate::error::ClientError;

/// Either envelope shape; `data` is absent on failures.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP data layer for the two listings.
pub struct ListingClient {
    http: ClientWithMiddleware,
    config: QueryConfig,
    cache: QueryCache,
}

impl ListingClient {
    pub fn new(config: QueryConfig) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(ClientError::Build)?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(config.min_retry_interval, config.max_retry_interval)
            .build_with_max_retries(config.retries);

        let http = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = QueryCache::new(config.stale_time, config.cache_time);

        Ok(Self {
            http,
            config,
            cache,
        })
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub async fn destinations(&self) -> Result<Vec<Destination>, ClientError> {
        self.fetch(ListingKey::Destinations).await
    }

    pub async fn packages(&self) -> Result<Vec<TourPackage>, ClientError> {
        self.fetch(ListingKey::Packages).await
    }

    async fn fetch<T: DeserializeOwned>(&self, key: ListingKey) -> Result<Vec<T>, ClientError> {
        if let Some(payload) = self.cache.fresh(key).await {
            debug!("Serving {:?} from cache", key);
            return Ok(serde_json::from_value(payload)?);
        }

        let url = self.config.url(key.path());
        debug!("Fetching {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            ClientError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {}", url, status);
            return Err(ClientError::Status(status));
        }

        let bytes = response.bytes().await.map_err(ClientError::Body)?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        if !envelope.success {
            let reason = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ClientError::Api(reason));
        }

        let records: Vec<T> = serde_json::from_value(envelope.data.clone())?;
        self.cache.store(key, envelope.data).await;
        Ok(records)
    }
}
