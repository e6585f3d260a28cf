use crate::dashboards::d400_verification_board::VerificationBoard;
use crate::dashboards::d401_asset_comparison::AssetComparison;
use crate::domain::a001_asset::ui::list::AssetList;
use crate::domain::a002_technical_parameter::ui::editor::ParameterEditor;
use crate::domain::a003_quotation_request::ui::list::QuotationRequestList;
use crate::domain::a003_quotation_request::ui::request::QuotationRequestForm;
use crate::domain::a004_tender::ui::list::TenderList;
use crate::domain::a005_contract::ui::list::ContractList;
use crate::layout::global_context::{use_global_context, Tab as TabData};
use crate::usecases::u501_asset_submission::SubmissionWizardPage;
use leptos::ev;
use leptos::prelude::*;

/// Префикс вкладки запроса penawaran: `a003_quotation_request_new:{asset_id}`
pub const QUOTATION_FORM_PREFIX: &str = "a003_quotation_request_new:";

pub fn tab_label_for_key(key: &str) -> String {
    match key {
        "d400_verification_board" => "Papan Verifikasi".into(),
        "d401_asset_comparison" => "Perbandingan Aset".into(),
        "a001_asset" => "Katalog Aset".into(),
        "a002_technical_parameter" => "Parameter Teknis".into(),
        "a003_quotation_request" => "Permintaan Penawaran".into(),
        "a004_tender" => "Tender".into(),
        "a005_contract" => "Kontrak".into(),
        "u501_asset_submission" => "Pengajuan Data Produk".into(),
        other if other.starts_with(QUOTATION_FORM_PREFIX) => "Buat Permintaan Penawaran".into(),
        other => other.to_string(),
    }
}

fn tab_content(key: &str) -> AnyView {
    if let Some(asset_id) = key.strip_prefix(QUOTATION_FORM_PREFIX) {
        let asset_id = asset_id.to_string();
        return view! { <QuotationRequestForm asset_id=asset_id /> }.into_any();
    }
    match key {
        "d400_verification_board" => view! { <VerificationBoard /> }.into_any(),
        "d401_asset_comparison" => view! { <AssetComparison /> }.into_any(),
        "a001_asset" => view! { <AssetList /> }.into_any(),
        "a002_technical_parameter" => view! { <ParameterEditor /> }.into_any(),
        "a003_quotation_request" => view! { <QuotationRequestList /> }.into_any(),
        "a004_tender" => view! { <TenderList /> }.into_any(),
        "a005_contract" => view! { <ContractList /> }.into_any(),
        "u501_asset_submission" => view! { <SubmissionWizardPage /> }.into_any(),
        other => {
            log::warn!("unknown tab key '{}'", other);
            view! { <div class="placeholder">"Halaman tidak ditemukan: " {other.to_string()}</div> }
                .into_any()
        }
    }
}

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let ctx = use_global_context();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| ctx.activate_tab(&key_for_click)>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Страница вкладки живет, пока вкладка открыта; неактивные скрываются
#[component]
fn TabPage(tab: TabData) -> impl IntoView {
    let ctx = use_global_context();
    let key = tab.key.clone();
    let is_active = move || ctx.active.get().as_deref() == Some(key.as_str());

    view! {
        <div class="tab-page" style:display=move || if is_active() { "block" } else { "none" }>
            {tab_content(&tab.key)}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=|tab| view! { <TabHeader tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <Show
                    when=move || !ctx.opened.with(|tabs| tabs.is_empty())
                    fallback=|| view! {
                        <div class="placeholder">"Pilih menu di sebelah kiri untuk memulai"</div>
                    }
                >
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=|tab| view! { <TabPage tab=tab /> }
                    />
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotation_form_keys_get_form_label() {
        let key = format!("{}123", QUOTATION_FORM_PREFIX);
        assert_eq!(tab_label_for_key(&key), "Buat Permintaan Penawaran");
        assert_eq!(tab_label_for_key("a004_tender"), "Tender");
        assert_eq!(tab_label_for_key("a005_contract"), "Kontrak");
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }
}
