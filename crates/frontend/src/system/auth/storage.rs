use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "migas_access_token";
const USER_INFO_KEY: &str = "migas_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Сохранить сессию: токен и профиль пользователя
pub fn save_session(token: &str, user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_INFO_KEY, &json);
        }
        Err(e) => log::warn!("failed to persist user profile: {}", e),
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Профиль из прошлой сессии; битый JSON считается отсутствующим
pub fn get_cached_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_INFO_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
