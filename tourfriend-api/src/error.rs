use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tourfriend_core::CoreError;
use tourfriend_shared::ApiErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A storage read failed. `message` is the endpoint-level summary sent
    /// to the client next to the underlying error text.
    #[error("{message}: {source}")]
    StorageError {
        message: &'static str,
        #[source]
        source: CoreError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::StorageError { message, source } => {
                tracing::error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody::new(message, source.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
