use std::sync::Arc;

use axum::http::HeaderValue;
use tourfriend_core::{DestinationRepository, PackageRepository};
use tourfriend_store::app_config::CorsConfig;
use tourfriend_store::ListingStores;

#[derive(Clone)]
pub struct AppState {
    pub destinations: Arc<dyn DestinationRepository>,
    pub packages: Arc<dyn PackageRepository>,
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    pub fn new(stores: ListingStores, cors: &CorsConfig) -> Self {
        let allowed_origins = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();

        Self {
            destinations: stores.destinations,
            packages: stores.packages,
            allowed_origins,
        }
    }
}
