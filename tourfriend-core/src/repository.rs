use async_trait::async_trait;
use tourfriend_catalog::ListingQuery;
use tourfriend_shared::{Destination, NewDestination, NewTourPackage, TourPackage};

use crate::CoreResult;

/// Repository trait for destination records
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn count_destinations(&self) -> CoreResult<u64>;

    /// Inserts all rows, returning how many were written.
    async fn insert_destinations(&self, rows: &[NewDestination]) -> CoreResult<u64>;

    async fn list_destinations(&self, query: &ListingQuery) -> CoreResult<Vec<Destination>>;
}

/// Repository trait for tour package records
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn count_packages(&self) -> CoreResult<u64>;

    async fn insert_packages(&self, rows: &[NewTourPackage]) -> CoreResult<u64>;

    async fn list_packages(&self, query: &ListingQuery) -> CoreResult<Vec<TourPackage>>;
}
