use contracts::domain::a001_asset::AssetCategory;
use contracts::domain::a002_technical_parameter::TechnicalParameter;
use contracts::shared::master_data::duplicate_fields;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_technical_parameter::api;
use crate::domain::a002_technical_parameter::context::MasterData;

/// Копия библиотечного параметра со свежим id
pub fn instantiate(template: &TechnicalParameter, suffix: &str) -> TechnicalParameter {
    let mut param = template.clone();
    param.id = format!("{}-{}", template.id, suffix);
    param
}

/// Сдвиг элемента на `offset` позиций; за границы списка не выходит
pub fn move_item<T>(items: &mut [T], index: usize, offset: isize) -> bool {
    let Some(target) = index.checked_add_signed(offset) else {
        return false;
    };
    if index >= items.len() || target >= items.len() {
        return false;
    }
    items.swap(index, target);
    true
}

/// Пустая строка группы означает группу по умолчанию
pub fn normalize_group(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// ViewModel редактора параметров категории (только для администратора)
#[derive(Clone, Copy)]
pub struct ParameterEditorViewModel {
    pub master: MasterData,
    pub category: RwSignal<AssetCategory>,
    pub draft: RwSignal<Vec<TechnicalParameter>>,
    pub library: RwSignal<Vec<TechnicalParameter>>,
    pub is_dirty: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
}

impl ParameterEditorViewModel {
    pub fn new(master: MasterData) -> Self {
        let category = AssetCategory::Vessel;
        let local_library = master
            .registry
            .with_untracked(|r| r.available_parameters().to_vec());
        Self {
            master,
            category: RwSignal::new(category),
            draft: RwSignal::new(master.registry.with_untracked(|r| r.parameters(category).to_vec())),
            library: RwSignal::new(local_library),
            is_dirty: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
        }
    }

    pub fn load_library(&self) {
        let library = self.library;
        spawn_local(async move {
            match api::fetch_library().await {
                Ok(items) => {
                    let _ = library.try_set(items);
                }
                Err(e) => log::warn!("parameter library fetch failed: {}", e),
            }
        });
    }

    /// Сбросить черновик к снимку реестра
    pub fn reset(&self) {
        let category = self.category.get_untracked();
        self.draft.set(self.master.parameters(category));
        self.is_dirty.set(false);
        self.error.set(None);
    }

    pub fn select_category(&self, category: AssetCategory) {
        if self.is_saving.get_untracked() {
            return;
        }
        self.category.set(category);
        self.notice.set(None);
        self.reset();
    }

    fn edit(&self, f: impl FnOnce(&mut Vec<TechnicalParameter>) -> bool) {
        let changed = self.draft.try_update(f).unwrap_or(false);
        if changed {
            self.is_dirty.set(true);
            self.notice.set(None);
        }
    }

    pub fn add_from_library(&self, library_id: &str) {
        let template = self
            .library
            .with_untracked(|lib| lib.iter().find(|p| p.id == library_id).cloned());
        let Some(template) = template else {
            self.error.set(Some(format!("Parameter '{}' tidak ada di pustaka", library_id)));
            return;
        };
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let param = instantiate(&template, &suffix[..8]);
        self.edit(move |draft| {
            draft.push(param);
            true
        });
    }

    pub fn remove(&self, index: usize) {
        self.edit(move |draft| {
            if index < draft.len() {
                draft.remove(index);
                true
            } else {
                false
            }
        });
    }

    pub fn move_up(&self, index: usize) {
        self.edit(move |draft| move_item(draft, index, -1));
    }

    pub fn move_down(&self, index: usize) {
        self.edit(move |draft| move_item(draft, index, 1));
    }

    pub fn set_group(&self, index: usize, raw: String) {
        let group = normalize_group(&raw);
        self.edit(move |draft| match draft.get_mut(index) {
            Some(param) if param.group != group => {
                param.group = group;
                true
            }
            _ => false,
        });
    }

    /// Поля с одинаковым ключом в черновике
    pub fn duplicates(&self) -> Vec<String> {
        self.draft.with(|draft| duplicate_fields(draft))
    }

    pub fn save_command(&self, token: Option<String>) {
        let Some(token) = token else {
            self.error.set(Some("Sesi tidak ditemukan".into()));
            return;
        };
        if self.is_saving.get_untracked() {
            return;
        }
        let category = self.category.get_untracked();
        let draft = self.draft.get_untracked();
        if let Some(e) = draft.iter().find_map(|p| p.validate().err()) {
            self.error.set(Some(e));
            return;
        }

        let this = *self;
        this.is_saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match api::update_parameters(&token, category, draft).await {
                Ok(stored) => {
                    log::info!("parameters saved for {}: {} fields", category, stored.len());
                    this.master.apply(category, stored.clone());
                    if this.category.try_get_untracked() == Some(category) {
                        let _ = this.draft.try_set(stored);
                        let _ = this.is_dirty.try_set(false);
                    }
                    let _ = this
                        .notice
                        .try_set(Some(format!("Parameter {} disimpan", category)));
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(format!("Gagal menyimpan: {}", e)));
                }
            }
            let _ = this.is_saving.try_set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiated_parameter_gets_new_id() {
        let template = TechnicalParameter::number("lib_speed", "Max Speed", "maxSpeed", Some("Knots"));
        let param = instantiate(&template, "a1b2c3d4");
        assert_eq!(param.id, "lib_speed-a1b2c3d4");
        assert_eq!(param.field, "maxSpeed");
        assert_eq!(param.unit.as_deref(), Some("Knots"));
    }

    #[test]
    fn move_item_stays_in_bounds() {
        let mut items = vec!['a', 'b', 'c'];
        assert!(!move_item(&mut items, 0, -1));
        assert!(!move_item(&mut items, 2, 1));
        assert!(move_item(&mut items, 1, -1));
        assert_eq!(items, vec!['b', 'a', 'c']);
        assert!(move_item(&mut items, 1, 1));
        assert_eq!(items, vec!['b', 'c', 'a']);
        assert!(!move_item(&mut items, 5, -1));
    }

    #[test]
    fn blank_group_means_default() {
        assert_eq!(normalize_group("   "), None);
        assert_eq!(normalize_group(" Marine "), Some("Marine".to_string()));
    }
}
