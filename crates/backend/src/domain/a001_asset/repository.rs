use std::sync::{Arc, PoisonError, RwLock};

use contracts::domain::a001_asset::Asset;

/// In-memory хранилище активов в порядке добавления
#[derive(Clone, Default)]
pub struct AssetStore {
    assets: Arc<RwLock<Vec<Asset>>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets(assets: Vec<Asset>) -> Self {
        Self {
            assets: Arc::new(RwLock::new(assets)),
        }
    }

    pub fn list_all(&self) -> Vec<Asset> {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Asset> {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|a| a.to_string_id() == id)
            .cloned()
    }

    /// Добавление в конец; порядок вставки сохраняется
    pub fn insert(&self, asset: Asset) {
        self.assets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(asset);
    }

    pub fn len(&self) -> usize {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
