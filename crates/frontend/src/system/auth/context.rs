use contracts::system::auth::{UserInfo, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn role(&self) -> Option<UserRole> {
        self.user_info.as_ref().map(|u| u.role)
    }
}

/// Провайдер сессии.
///
/// Сессия из localStorage применяется сразу, затем проверяется на
/// backend-е; отвергнутый токен очищает хранилище.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let restored = AuthState {
        access_token: storage::get_access_token(),
        user_info: storage::get_cached_user(),
    };
    let restored = if restored.access_token.is_some() && restored.user_info.is_some() {
        restored
    } else {
        AuthState::default()
    };
    let (auth_state, set_auth_state) = signal(restored);

    if let Some(access_token) = auth_state.get_untracked().access_token {
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    storage::save_session(&access_token, &user_info);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(e) => {
                    log::info!("stored session rejected: {}", e);
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Текущий токен без подписки на изменения
pub fn current_token() -> Option<String> {
    let (auth_state, _) = use_auth();
    auth_state.get_untracked().access_token
}

pub async fn do_login(
    email: String,
    role: UserRole,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, role).await?;
    storage::save_session(&response.token, &response.user);
    log::info!("logged in as {} ({})", response.user.email, response.user.role.as_str());
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
    });
    Ok(())
}

/// Выход всегда очищает локальную сессию, даже если backend недоступен
pub async fn do_logout(access_token: Option<String>, set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = access_token {
        if let Err(e) = api::logout(&token).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
