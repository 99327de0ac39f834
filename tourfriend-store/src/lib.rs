pub mod app_config;
pub mod database;
pub mod error;
pub mod listing_repo;
pub mod memory_repo;

use std::sync::Arc;

use tourfriend_core::{DestinationRepository, PackageRepository};
use tracing::info;

pub use app_config::{Config, StoreBackend};
pub use database::DbClient;
pub use error::StoreError;
pub use listing_repo::PostgresListingRepository;
pub use memory_repo::InMemoryListingStore;

/// Repository handles for both collections, backed by the same store.
#[derive(Clone)]
pub struct ListingStores {
    pub destinations: Arc<dyn DestinationRepository>,
    pub packages: Arc<dyn PackageRepository>,
}

impl ListingStores {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryListingStore::new());
        Self {
            destinations: store.clone(),
            packages: store,
        }
    }
}

/// Opens the configured backend. The postgres backend runs pending
/// migrations before returning.
pub async fn connect(config: &app_config::DatabaseConfig) -> Result<ListingStores, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory listing store");
            Ok(ListingStores::in_memory())
        }
        StoreBackend::Postgres => {
            let db = DbClient::from_config(config).await?;
            db.migrate().await?;
            let repo = Arc::new(PostgresListingRepository::new(db.pool.clone()));
            Ok(ListingStores {
                destinations: repo.clone(),
                packages: repo,
            })
        }
    }
}
