use contracts::domain::a001_asset::Asset;
use contracts::usecases::u501_asset_submission::{BkiRecord, DocumentPolicy};

use crate::domain::a001_asset::api as asset_api;
use crate::shared::api_utils::{get_json, get_optional};

/// Поиск в реестре BKI. `Ok(None)` - записи с таким IMO нет.
pub async fn lookup_bki(imo_number: &str) -> Result<Option<BkiRecord>, String> {
    let path = format!("/api/u501/bki/{}", urlencoding::encode(imo_number.trim()));
    get_optional(&path, None).await
}

pub async fn fetch_policy() -> Result<DocumentPolicy, String> {
    get_json("/api/u501/policy", None).await
}

pub async fn register_asset(token: &str, asset: &Asset) -> Result<Asset, String> {
    asset_api::create_asset(token, asset).await
}
