#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("API reported failure: {0}")]
    Api(String),
}
