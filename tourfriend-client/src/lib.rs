//! Client side of the TourFriend listing site: fetches the two listings,
//! tracks each request's state, and turns records into card views.

pub mod cache;
pub mod config;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod hero;
pub mod render;
pub mod scroll;
pub mod section;
pub mod state;
pub mod view;

pub use cache::{ListingKey, QueryCache};
pub use config::QueryConfig;
pub use error::ClientError;
pub use favorites::Favorites;
pub use fetch::ListingClient;
pub use section::{DestinationsSection, PackagesSection, SectionView};
pub use state::{Listing, ListingState};
