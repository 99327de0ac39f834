pub mod envelope;
pub mod models;

pub use envelope::{ApiErrorBody, ApiResponse, HealthResponse};
pub use models::{Destination, NewDestination, NewTourPackage, TourPackage};
