use std::future::Future;

use tracing::warn;

use crate::error::ClientError;

/// Lifecycle of one listing request: `Idle -> Loading -> Success | Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState<T> {
    Idle,
    Loading,
    Success(Vec<T>),
    /// `detail` is for logs only; the page shows a fixed banner.
    Error { detail: String },
}

impl<T> ListingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ListingState::Success(_) | ListingState::Error { .. })
    }
}

/// Owns the state of one listing. Each listing has its own instance; two
/// listings never share state.
#[derive(Debug)]
pub struct Listing<T> {
    state: ListingState<T>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Listing<T> {
    pub fn new() -> Self {
        Self {
            state: ListingState::Idle,
        }
    }

    pub fn state(&self) -> &ListingState<T> {
        &self.state
    }

    /// Starts a request. Any previous outcome is discarded.
    pub fn begin(&mut self) {
        self.state = ListingState::Loading;
    }

    /// Records the outcome of the in-flight request. Ignored unless a
    /// request is in flight.
    pub fn resolve(&mut self, result: Result<Vec<T>, ClientError>) {
        if !self.state.is_loading() {
            warn!("Dropping listing result with no request in flight");
            return;
        }

        self.state = match result {
            Ok(records) => ListingState::Success(records),
            Err(e) => {
                warn!("Listing failed to load: {}", e);
                ListingState::Error {
                    detail: e.to_string(),
                }
            }
        };
    }

    pub async fn load<F>(&mut self, request: F)
    where
        F: Future<Output = Result<Vec<T>, ClientError>>,
    {
        self.begin();
        let result = request.await;
        self.resolve(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut listing: Listing<u32> = Listing::new();
        assert_eq!(listing.state(), &ListingState::Idle);

        listing.begin();
        assert!(listing.state().is_loading());

        listing.resolve(Ok(vec![1, 2, 3]));
        assert_eq!(listing.state(), &ListingState::Success(vec![1, 2, 3]));
        assert!(listing.state().is_terminal());
    }

    #[test]
    fn test_error_path_and_restart() {
        let mut listing: Listing<u32> = Listing::new();
        listing.begin();
        listing.resolve(Err(ClientError::Api("Error fetching destinations".to_string())));
        assert!(matches!(listing.state(), ListingState::Error { .. }));

        // A fresh request restarts the cycle.
        listing.begin();
        assert!(listing.state().is_loading());
    }

    #[test]
    fn test_result_without_request_is_ignored() {
        let mut listing: Listing<u32> = Listing::new();
        listing.resolve(Ok(vec![7]));
        assert_eq!(listing.state(), &ListingState::Idle);

        listing.begin();
        listing.resolve(Ok(vec![1]));
        listing.resolve(Err(ClientError::Api("late".to_string())));
        assert_eq!(listing.state(), &ListingState::Success(vec![1]));
    }

    #[tokio::test]
    async fn test_load_runs_request() {
        let mut listing: Listing<&str> = Listing::new();
        listing.load(async { Ok(vec!["Goa"]) }).await;
        assert_eq!(listing.state(), &ListingState::Success(vec!["Goa"]));
    }
}
