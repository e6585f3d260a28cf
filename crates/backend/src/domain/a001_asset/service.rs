use chrono::Utc;
use contracts::domain::a001_asset::{Asset, AssetId};
use contracts::system::auth::UserInfo;

use super::repository::AssetStore;

/// Добавление актива. Владелец берется из сессии, если не указан.
///
/// Уже существующий `id` заменяется новым, чтобы записи оставались уникальными.
pub fn add_asset(store: &AssetStore, mut asset: Asset, user: &UserInfo) -> anyhow::Result<Asset> {
    asset
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    if asset.owner_vendor_id.is_none() {
        asset.owner_vendor_id = Some(user.id.clone());
    }
    if store.get_by_id(&asset.to_string_id()).is_some() {
        tracing::warn!("Asset id {} already present, assigning a new one", asset.to_string_id());
        asset.id = AssetId::new_v4();
    }
    asset.metadata.touch(Utc::now());

    tracing::info!(
        "Asset added: {} '{}' ({}, {})",
        asset.number,
        asset.name,
        asset.category,
        asset.status.as_str()
    );
    store.insert(asset.clone());
    Ok(asset)
}

pub fn list_all(store: &AssetStore) -> Vec<Asset> {
    store.list_all()
}

pub fn get_by_id(store: &AssetStore, id: &str) -> Option<Asset> {
    store.get_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::seed::demo_assets;
    use contracts::system::auth::UserRole;

    fn vendor() -> UserInfo {
        UserInfo::simulated("v-009", "vendor@mail.com", UserRole::Vendor)
    }

    #[test]
    fn added_asset_is_listed_last() {
        let store = AssetStore::with_assets(demo_assets());
        let mut asset = demo_assets().remove(1);
        asset.id = AssetId::new_v4();
        asset.owner_vendor_id = None;
        asset.name = "Vessel D".into();

        let saved = add_asset(&store, asset, &vendor()).unwrap();
        assert_eq!(saved.owner_vendor_id.as_deref(), Some("v-009"));
        let all = list_all(&store);
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].name, "Vessel D");
        assert!(get_by_id(&store, &saved.to_string_id()).is_some());
    }

    #[test]
    fn explicit_owner_is_kept() {
        let store = AssetStore::new();
        let asset = demo_assets().remove(0);
        let saved = add_asset(&store, asset, &vendor()).unwrap();
        assert_eq!(saved.owner_vendor_id.as_deref(), Some("v-001"));
    }

    #[test]
    fn duplicate_id_gets_fresh_one() {
        let seeded = demo_assets();
        let store = AssetStore::with_assets(seeded.clone());
        let saved = add_asset(&store, seeded[0].clone(), &vendor()).unwrap();
        assert_ne!(saved.id, seeded[0].id);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn invalid_asset_is_rejected() {
        let store = AssetStore::new();
        let mut asset = demo_assets().remove(0);
        asset.name = "  ".into();
        assert!(add_asset(&store, asset, &vendor()).is_err());
        assert!(store.is_empty());
    }
}
