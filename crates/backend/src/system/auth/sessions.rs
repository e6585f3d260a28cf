use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use uuid::Uuid;

/// Сессии демонстрационного входа: token -> пользователь
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, UserInfo>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Вход без пароля: профиль определяется выбранной ролью
    pub fn login(&self, request: &LoginRequest) -> anyhow::Result<LoginResponse> {
        if request.email.trim().is_empty() {
            anyhow::bail!("Email is required");
        }
        let user = UserInfo::simulated(Uuid::new_v4().to_string(), &request.email, request.role);
        let token = Uuid::new_v4().simple().to_string();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), user.clone());
        tracing::info!("User {} logged in as {}", user.email, user.role.as_str());
        Ok(LoginResponse { token, user })
    }

    pub fn resolve(&self, token: &str) -> Option<UserInfo> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// `false`, если сессии уже не было
    pub fn logout(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    #[test]
    fn login_resolve_logout() {
        let store = SessionStore::new();
        let response = store
            .login(&LoginRequest {
                email: "admin@skkmigas.go.id".into(),
                role: UserRole::Admin,
            })
            .unwrap();
        assert_eq!(response.user.name, "System Administrator");
        assert_eq!(store.resolve(&response.token), Some(response.user.clone()));
        assert!(store.logout(&response.token));
        assert!(store.resolve(&response.token).is_none());
        assert!(!store.logout(&response.token));
    }

    #[test]
    fn empty_email_is_rejected() {
        let store = SessionStore::new();
        let request = LoginRequest {
            email: " ".into(),
            role: UserRole::Vendor,
        };
        assert!(store.login(&request).is_err());
    }
}
