use contracts::domain::a001_asset::AssetCategory;
use contracts::domain::a002_technical_parameter::TechnicalParameter;
use contracts::shared::master_data::ParameterRegistry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Мастер-данные: клиентский снимок реестра параметров.
///
/// До ответа backend-а работает встроенная конфигурация, поэтому
/// формы доступны сразу.
#[derive(Clone, Copy)]
pub struct MasterData {
    pub registry: RwSignal<ParameterRegistry>,
    pub is_synced: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl MasterData {
    fn new() -> Self {
        Self {
            registry: RwSignal::new(ParameterRegistry::with_defaults()),
            is_synced: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn reload(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_config().await {
                Ok(config) => {
                    let _ = this.registry.try_set(ParameterRegistry::from_config(config));
                    let _ = this.is_synced.try_set(true);
                    let _ = this.error.try_set(None);
                }
                Err(e) => {
                    log::warn!("parameter registry fetch failed, keeping defaults: {}", e);
                    let _ = this.error.try_set(Some(e));
                }
            }
        });
    }

    /// Список категории из текущего снимка
    pub fn parameters(&self, category: AssetCategory) -> Vec<TechnicalParameter> {
        self.registry.with(|r| r.parameters(category).to_vec())
    }

    /// Применить список, подтвержденный backend-ом
    pub fn apply(&self, category: AssetCategory, params: Vec<TechnicalParameter>) {
        self.registry.update(|r| r.set_parameters(category, params));
    }
}

#[component]
pub fn MasterDataProvider(children: ChildrenFn) -> impl IntoView {
    let master_data = MasterData::new();
    master_data.reload();
    provide_context(master_data);
    children()
}

pub fn use_master_data() -> MasterData {
    use_context::<MasterData>().expect("MasterDataProvider not found in component tree")
}
