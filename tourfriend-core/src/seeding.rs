//! Startup bootstrap: fill empty collections with the predefined rows.
//!
//! A collection that already holds any row is left untouched. Existing rows
//! are never reconciled against the predefined set.

use tourfriend_catalog::{mock_destinations, mock_packages};
use tracing::{error, info};

use crate::repository::{DestinationRepository, PackageRepository};
use crate::CoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(u64),
    Skipped { existing: u64 },
}

/// Result of a full bootstrap. `None` means seeding that collection failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub destinations: Option<SeedOutcome>,
    pub packages: Option<SeedOutcome>,
}

pub async fn seed_destinations(repo: &dyn DestinationRepository) -> CoreResult<SeedOutcome> {
    let existing = repo.count_destinations().await?;
    if existing > 0 {
        return Ok(SeedOutcome::Skipped { existing });
    }

    let inserted = repo.insert_destinations(&mock_destinations()).await?;
    info!("Mock destinations inserted ({})", inserted);
    Ok(SeedOutcome::Inserted(inserted))
}

pub async fn seed_packages(repo: &dyn PackageRepository) -> CoreResult<SeedOutcome> {
    let existing = repo.count_packages().await?;
    if existing > 0 {
        return Ok(SeedOutcome::Skipped { existing });
    }

    let inserted = repo.insert_packages(&mock_packages()).await?;
    info!("Mock packages inserted ({})", inserted);
    Ok(SeedOutcome::Inserted(inserted))
}

/// Seeds both collections. Failures are logged and swallowed so the server
/// keeps serving (possibly empty) listings.
pub async fn initialize(
    destinations: &dyn DestinationRepository,
    packages: &dyn PackageRepository,
) -> SeedReport {
    let destinations = match seed_destinations(destinations).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("Error initializing destinations: {}", e);
            None
        }
    };

    let packages = match seed_packages(packages).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("Error initializing packages: {}", e);
            None
        }
    };

    SeedReport {
        destinations,
        packages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use tourfriend_catalog::ListingQuery;
    use tourfriend_shared::{Destination, NewDestination, NewTourPackage, TourPackage};
    use uuid::Uuid;

    #[derive(Default)]
    struct FakeStore {
        destinations: Mutex<Vec<Destination>>,
        packages: Mutex<Vec<TourPackage>>,
        broken: bool,
    }

    impl FakeStore {
        fn check(&self) -> CoreResult<()> {
            if self.broken {
                return Err(CoreError::StorageError("connection refused".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl DestinationRepository for FakeStore {
        async fn count_destinations(&self) -> CoreResult<u64> {
            self.check()?;
            Ok(self.destinations.lock().unwrap().len() as u64)
        }

        async fn insert_destinations(&self, rows: &[NewDestination]) -> CoreResult<u64> {
            self.check()?;
            let mut guard = self.destinations.lock().unwrap();
            for row in rows {
                guard.push(row.clone().into_destination(Uuid::new_v4(), Utc::now()));
            }
            Ok(rows.len() as u64)
        }

        async fn list_destinations(&self, query: &ListingQuery) -> CoreResult<Vec<Destination>> {
            self.check()?;
            Ok(query.apply(self.destinations.lock().unwrap().as_slice()))
        }
    }

    #[async_trait]
    impl PackageRepository for FakeStore {
        async fn count_packages(&self) -> CoreResult<u64> {
            self.check()?;
            Ok(self.packages.lock().unwrap().len() as u64)
        }

        async fn insert_packages(&self, rows: &[NewTourPackage]) -> CoreResult<u64> {
            self.check()?;
            let mut guard = self.packages.lock().unwrap();
            for row in rows {
                guard.push(row.clone().into_package(Uuid::new_v4(), Utc::now()));
            }
            Ok(rows.len() as u64)
        }

        async fn list_packages(&self, query: &ListingQuery) -> CoreResult<Vec<TourPackage>> {
            self.check()?;
            Ok(query.apply(self.packages.lock().unwrap().as_slice()))
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = FakeStore::default();

        let first = initialize(&store, &store).await;
        assert_eq!(first.destinations, Some(SeedOutcome::Inserted(6)));
        assert_eq!(first.packages, Some(SeedOutcome::Inserted(6)));

        let second = initialize(&store, &store).await;
        assert_eq!(second.destinations, Some(SeedOutcome::Skipped { existing: 6 }));
        assert_eq!(second.packages, Some(SeedOutcome::Skipped { existing: 6 }));
        assert_eq!(store.count_destinations().await.unwrap(), 6);
        assert_eq!(store.count_packages().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_seed_leaves_non_empty_collection_alone() {
        let store = FakeStore::default();
        store
            .insert_destinations(&mock_destinations()[..1])
            .await
            .unwrap();

        let outcome = seed_destinations(&store).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
        assert_eq!(store.count_destinations().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_failure_is_swallowed() {
        let store = FakeStore {
            broken: true,
            ..Default::default()
        };

        let report = initialize(&store, &store).await;

        assert_eq!(report.destinations, None);
        assert_eq!(report.packages, None);
    }
}
