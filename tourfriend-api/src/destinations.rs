use axum::{extract::State, routing::get, Json, Router};
use tourfriend_catalog::ListingQuery;
use tourfriend_shared::{ApiResponse, Destination};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/destinations", get(list_destinations))
}

/// GET /api/destinations
/// Featured destinations, best rated first, at most six.
pub async fn list_destinations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Destination>>>, AppError> {
    let destinations = state
        .destinations
        .list_destinations(&ListingQuery::popular_destinations())
        .await
        .map_err(|source| AppError::StorageError {
            message: "Error fetching destinations",
            source,
        })?;

    Ok(Json(ApiResponse::ok(
        destinations,
        "Destinations fetched successfully",
    )))
}
