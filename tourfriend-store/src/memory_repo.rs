use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tourfriend_catalog::ListingQuery;
use tourfriend_core::{CoreResult, DestinationRepository, PackageRepository};
use tourfriend_shared::{Destination, NewDestination, NewTourPackage, TourPackage};
use uuid::Uuid;

/// Process-local store with the same listing semantics as the SQL backend.
/// Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryListingStore {
    destinations: RwLock<Vec<Destination>>,
    packages: RwLock<Vec<TourPackage>>,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DestinationRepository for InMemoryListingStore {
    async fn count_destinations(&self) -> CoreResult<u64> {
        Ok(self.destinations.read().await.len() as u64)
    }

    async fn insert_destinations(&self, rows: &[NewDestination]) -> CoreResult<u64> {
        let mut guard = self.destinations.write().await;
        let now = Utc::now();
        guard.extend(
            rows.iter()
                .cloned()
                .map(|row| row.into_destination(Uuid::new_v4(), now)),
        );
        Ok(rows.len() as u64)
    }

    async fn list_destinations(&self, query: &ListingQuery) -> CoreResult<Vec<Destination>> {
        let guard = self.destinations.read().await;
        Ok(query.apply(guard.as_slice()))
    }
}

#[async_trait]
impl PackageRepository for InMemoryListingStore {
    async fn count_packages(&self) -> CoreResult<u64> {
        Ok(self.packages.read().await.len() as u64)
    }

    async fn insert_packages(&self, rows: &[NewTourPackage]) -> CoreResult<u64> {
        let mut guard = self.packages.write().await;
        let now = Utc::now();
        guard.extend(
            rows.iter()
                .cloned()
                .map(|row| row.into_package(Uuid::new_v4(), now)),
        );
        Ok(rows.len() as u64)
    }

    async fn list_packages(&self, query: &ListingQuery) -> CoreResult<Vec<TourPackage>> {
        let guard = self.packages.read().await;
        Ok(query.apply(guard.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourfriend_catalog::{mock_destinations, mock_packages};
    use tourfriend_core::seeding;

    #[tokio::test]
    async fn test_seeded_destination_order() {
        let store = InMemoryListingStore::new();
        seeding::initialize(&store, &store).await;

        let listed = store
            .list_destinations(&ListingQuery::popular_destinations())
            .await
            .unwrap();
        let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Kerala", "Goa", "Himachal Pradesh", "Rajasthan", "Uttarakhand", "Tamil Nadu"]
        );
    }

    #[tokio::test]
    async fn test_seeded_package_order() {
        let store = InMemoryListingStore::new();
        seeding::initialize(&store, &store).await;

        let listed = store
            .list_packages(&ListingQuery::top_selling_packages())
            .await
            .unwrap();
        let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Goa Beach Paradise",
                "Golden Triangle Tour",
                "Kerala Backwaters",
                "Kashmir Valley Explorer",
                "Rajasthan Royal Experience",
                "Ladakh Adventure",
            ]
        );
    }

    #[tokio::test]
    async fn test_hidden_and_overflow_rows_are_dropped() {
        let store = InMemoryListingStore::new();
        store.insert_packages(&mock_packages()).await.unwrap();
        store.insert_packages(&mock_packages()).await.unwrap();

        let mut hidden = mock_packages()[0].clone();
        hidden.featured = false;
        hidden.sales_count = 1_000_000;
        store.insert_packages(&[hidden]).await.unwrap();

        let listed = store
            .list_packages(&ListingQuery::top_selling_packages())
            .await
            .unwrap();

        assert_eq!(store.count_packages().await.unwrap(), 13);
        assert_eq!(listed.len(), 6);
        assert!(listed.iter().all(|p| p.featured));
        assert!(listed
            .windows(2)
            .all(|w| (w[0].sales_count, w[0].rating) >= (w[1].sales_count, w[1].rating)));
    }

    #[tokio::test]
    async fn test_reseed_keeps_row_count() {
        let store = InMemoryListingStore::new();
        store.insert_destinations(&mock_destinations()).await.unwrap();

        seeding::initialize(&store, &store).await;
        seeding::initialize(&store, &store).await;

        assert_eq!(store.count_destinations().await.unwrap(), 6);
        assert_eq!(store.count_packages().await.unwrap(), 6);
    }
}
