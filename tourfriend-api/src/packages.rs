use axum::{extract::State, routing::get, Json, Router};
use tourfriend_catalog::ListingQuery;
use tourfriend_shared::{ApiResponse, TourPackage};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/packages/top-selling", get(list_top_selling))
}

/// GET /api/packages/top-selling
/// Featured packages ordered by sales, then rating.
pub async fn list_top_selling(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TourPackage>>>, AppError> {
    let packages = state
        .packages
        .list_packages(&ListingQuery::top_selling_packages())
        .await
        .map_err(|source| AppError::StorageError {
            message: "Error fetching packages",
            source,
        })?;

    Ok(Json(ApiResponse::ok(
        packages,
        "Top-selling packages fetched successfully",
    )))
}
