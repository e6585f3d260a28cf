use axum::{extract::State, Json};
use chrono::Utc;
use contracts::domain::a004_tender::TenderView;

use crate::domain::a004_tender::service;
use crate::shared::state::AppState;

/// GET /api/a004/tender
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<TenderView>> {
    Json(service::list_views(&state.tenders, Utc::now()))
}
