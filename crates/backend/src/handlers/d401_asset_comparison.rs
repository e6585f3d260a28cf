use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d401_asset_comparison::CompareResponse;
use serde::Deserialize;

use crate::dashboards::d401_asset_comparison::service;
use crate::shared::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Список id через запятую
    pub ids: Option<String>,
}

/// GET /api/d401/compare?ids=a,b
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareResponse>, StatusCode> {
    let ids = service::parse_ids(query.ids.as_deref().unwrap_or_default());
    service::compare(&state.assets, &ids)
        .map(Json)
        .ok_or(StatusCode::BAD_REQUEST)
}
