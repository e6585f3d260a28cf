use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::middleware::bearer_token;

/// Login handler: вход по выбранной роли, без пароля
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    state.sessions.login(&request).map(Json).map_err(|e| {
        tracing::warn!("Login rejected: {}", e);
        StatusCode::BAD_REQUEST
    })
}

/// Logout handler (protected by middleware)
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(token);
    }
    StatusCode::OK
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserInfo> {
    Json(user)
}
