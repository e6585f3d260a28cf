use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a005_contract::Contract;

use crate::shared::state::AppState;

/// GET /api/a005/contract
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Contract>> {
    Json(state.contracts.list_all())
}

/// GET /api/a005/contract/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contract>, StatusCode> {
    state.contracts.get_by_id(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}
