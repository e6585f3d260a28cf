use contracts::domain::a001_asset::Asset;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::system::auth::context::use_auth;

/// Клиентская копия хранилища активов
#[derive(Clone, Copy)]
pub struct AssetStore {
    pub assets: RwSignal<Vec<Asset>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AssetStore {
    fn new() -> Self {
        Self {
            assets: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn refresh(&self) {
        let store = *self;
        store.is_loading.set(true);
        spawn_local(async move {
            match api::fetch_assets().await {
                Ok(items) => {
                    log::debug!("asset store refreshed: {} items", items.len());
                    let _ = store.assets.try_set(items);
                    let _ = store.error.try_set(None);
                }
                Err(e) => {
                    let _ = store.error.try_set(Some(format!("Gagal memuat aset: {}", e)));
                }
            }
            let _ = store.is_loading.try_set(false);
        });
    }

    /// Добавляет подтвержденный backend-ом актив без повторной загрузки
    pub fn push(&self, asset: Asset) {
        self.assets.update(|items| {
            items.retain(|a| a.id != asset.id);
            items.push(asset);
        });
    }

    pub fn find(&self, id: &str) -> Option<Asset> {
        self.assets
            .with(|items| items.iter().find(|a| a.to_string_id() == id).cloned())
    }
}

/// Загружает активы при каждом входе пользователя
#[component]
pub fn AssetStoreProvider(children: ChildrenFn) -> impl IntoView {
    let store = AssetStore::new();
    let (auth_state, _) = use_auth();

    Effect::new(move |_| {
        if auth_state.with(|s| s.access_token.is_some()) {
            store.refresh();
        } else {
            store.assets.set(Vec::new());
        }
    });

    provide_context(store);
    children()
}

pub fn use_asset_store() -> AssetStore {
    use_context::<AssetStore>().expect("AssetStoreProvider not found in component tree")
}
