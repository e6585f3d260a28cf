use contracts::domain::a001_asset::Asset;

use crate::shared::api_utils::{get_json, post_json};

pub async fn fetch_assets() -> Result<Vec<Asset>, String> {
    get_json("/api/a001/asset", None).await
}

/// Регистрирует актив; владелец проставляется backend-ом по сессии
pub async fn create_asset(token: &str, asset: &Asset) -> Result<Asset, String> {
    post_json("/api/a001/asset", Some(token), asset).await
}
