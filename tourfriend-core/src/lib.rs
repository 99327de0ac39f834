pub mod repository;
pub mod seeding;

pub use repository::{DestinationRepository, PackageRepository};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
