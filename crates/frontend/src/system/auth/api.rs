use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo, UserRole};

use crate::shared::api_utils::{get_json, post_empty, post_json};

/// Симулированный вход: пароль не нужен, профиль определяется ролью
pub async fn login(email: String, role: UserRole) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, role };
    post_json("/api/system/auth/login", None, &request)
        .await
        .map_err(|e| format!("Login failed: {}", e))
}

pub async fn logout(access_token: &str) -> Result<(), String> {
    post_empty("/api/system/auth/logout", Some(access_token)).await
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    get_json("/api/system/auth/me", Some(access_token)).await
}
