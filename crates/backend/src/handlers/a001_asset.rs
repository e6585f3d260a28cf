use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_asset::Asset;

use crate::domain::a001_asset::service;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/a001/asset
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Asset>> {
    Json(service::list_all(&state.assets))
}

/// GET /api/a001/asset/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Asset>, StatusCode> {
    service::get_by_id(&state.assets, &id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /api/a001/asset
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(asset): Json<Asset>,
) -> Result<Json<Asset>, StatusCode> {
    match service::add_asset(&state.assets, asset, &user) {
        Ok(saved) => Ok(Json(saved)),
        Err(e) => {
            tracing::warn!("Asset rejected: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
