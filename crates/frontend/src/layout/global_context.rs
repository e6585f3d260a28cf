use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Состояние оболочки: открытые вкладки, активная вкладка, сайдбар
/// и набор активов, отмеченных для сравнения.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub compare_selection: RwSignal<Vec<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            compare_selection: RwSignal::new(vec![]),
        }
    }

    /// Синхронизирует активную вкладку с `?active=...` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let requested = search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("active="))
            .and_then(|raw| urlencoding::decode(raw).ok())
            .map(|key| key.into_owned());
        if let Some(active_key) = requested.filter(|k| !k.is_empty()) {
            let title = super::tabs::tab_label_for_key(&active_key);
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = format!("?active={}", urlencoding::encode(&active_key));
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Закрытие вкладки уничтожает ее страницу вместе с reactive owner-ом
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Закрывает все вкладки (при выходе из системы)
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
        self.compare_selection.set(vec![]);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_compare(&self, asset_id: &str) {
        self.compare_selection.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| id == asset_id) {
                ids.remove(pos);
            } else {
                ids.push(asset_id.to_string());
            }
        });
    }

    pub fn is_selected_for_compare(&self, asset_id: &str) -> bool {
        self.compare_selection
            .with(|ids| ids.iter().any(|id| id == asset_id))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Доступ к контексту оболочки
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
