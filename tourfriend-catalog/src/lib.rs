pub mod listing;
pub mod seed;

pub use listing::{Direction, Listable, ListingQuery, SortField, SortKey, LISTING_LIMIT};
pub use seed::{mock_destinations, mock_packages};
