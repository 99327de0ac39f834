pub mod listing;

pub use listing::{Destination, NewDestination, NewTourPackage, TourPackage};
