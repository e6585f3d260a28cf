use contracts::domain::a001_asset::Asset;
use contracts::shared::format::format_idr;
use contracts::system::auth::UserRole;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner};

use super::status::AssetStatusBadge;
use crate::domain::a001_asset::context::use_asset_store;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::{tab_label_for_key, QUOTATION_FORM_PREFIX};
use crate::system::auth::context::use_auth;

fn can_request_quotation(role: Option<UserRole>) -> bool {
    matches!(role, Some(UserRole::Admin))
}

#[component]
fn AssetRow(asset: Asset, show_quote: bool) -> impl IntoView {
    let ctx = use_global_context();
    let id = asset.to_string_id();
    let id_for_check = id.clone();
    let id_for_toggle = id.clone();
    let quote_key = format!("{}{}", QUOTATION_FORM_PREFIX, id);

    view! {
        <tr>
            <td>
                <input
                    type="checkbox"
                    title="Bandingkan"
                    prop:checked=move || ctx.is_selected_for_compare(&id_for_check)
                    on:change=move |_| ctx.toggle_compare(&id_for_toggle)
                />
            </td>
            <td>{asset.number.clone()}</td>
            <td>{asset.name.clone()}</td>
            <td>{asset.category.as_str()}</td>
            <td><AssetStatusBadge status=asset.status /></td>
            <td class="num">{format!("{}%", asset.health)}</td>
            <td class="num">{format_idr(asset.daily_rate)}</td>
            <td class="num">{asset.year_built}</td>
            <td>{asset.capacity.clone()}</td>
            <td>
                {show_quote.then(|| {
                    let title = tab_label_for_key(&quote_key);
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| ctx.open_tab(&quote_key, &title)
                        >
                            "Minta Penawaran"
                        </Button>
                    }
                })}
            </td>
        </tr>
    }
}

/// Каталог активов с выбором для сравнения
#[component]
pub fn AssetList() -> impl IntoView {
    let store = use_asset_store();
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    let selected_count = move || ctx.compare_selection.with(|ids| ids.len());
    let open_compare = move |_| {
        let key = "d401_asset_comparison";
        ctx.open_tab(key, &tab_label_for_key(key));
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Katalog Aset"</h2>
                <div class="page__actions">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || selected_count() == 0)
                        on_click=open_compare
                    >
                        {move || format!("Bandingkan ({})", selected_count())}
                    </Button>
                    <Button size=ButtonSize::Small on_click=move |_| store.refresh()>
                        "Muat Ulang"
                    </Button>
                </div>
            </div>

            <Show when=move || store.error.get().is_some()>
                <div class="error-message">{move || store.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !store.is_loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Nomor"</th>
                            <th>"Nama"</th>
                            <th>"Kategori"</th>
                            <th>"Status"</th>
                            <th>"Health"</th>
                            <th>"Tarif Harian"</th>
                            <th>"Tahun"</th>
                            <th>"Kapasitas"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.assets.get()
                            key=|asset| asset.to_string_id()
                            children=move |asset| {
                                let show_quote = can_request_quotation(auth_state.get_untracked().role());
                                view! { <AssetRow asset=asset show_quote=show_quote /> }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
