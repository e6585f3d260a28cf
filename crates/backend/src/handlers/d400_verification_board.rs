use axum::{extract::State, Json};
use contracts::dashboards::d400_verification_board::VerificationBoardResponse;

use crate::dashboards::d400_verification_board::service;
use crate::shared::state::AppState;

/// GET /api/d400/verification-board
pub async fn get_board(State(state): State<AppState>) -> Json<VerificationBoardResponse> {
    Json(service::build_board(&state.assets))
}
