use contracts::domain::a003_quotation_request::{QuotationRequest, QuotationStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonSize, Spinner};

use crate::domain::a003_quotation_request::api;
use crate::system::auth::context::current_token;

fn status_view(status: QuotationStatus) -> impl IntoView {
    let (label, color) = match status {
        QuotationStatus::Approved => ("Disetujui", BadgeColor::Success),
        QuotationStatus::Pending => ("Menunggu", BadgeColor::Warning),
        QuotationStatus::Review => ("Ditinjau", BadgeColor::Informative),
        QuotationStatus::Rejected => ("Ditolak", BadgeColor::Danger),
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge> }
}

#[component]
pub fn QuotationRequestList() -> impl IntoView {
    let items = RwSignal::new(Vec::<QuotationRequest>::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let token = current_token();

    let load = move || {
        let Some(token) = token.clone() else {
            error.set(Some("Sesi tidak ditemukan".into()));
            return;
        };
        is_loading.set(true);
        spawn_local(async move {
            match api::fetch_requests(&token).await {
                Ok(list) => {
                    let _ = items.try_set(list);
                    let _ = error.try_set(None);
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = is_loading.try_set(false);
        });
    };
    load();

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Permintaan Penawaran"</h2>
                <Button size=ButtonSize::Small on_click=move |_| load()>"Muat Ulang"</Button>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !is_loading.get() fallback=|| view! { <Spinner /> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Tanggal"</th>
                            <th>"Aset"</th>
                            <th>"Proyek"</th>
                            <th>"KKKS"</th>
                            <th>"HPS"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|r| r.id.clone()
                            children=|r| view! {
                                <tr>
                                    <td>{r.id.clone()}</td>
                                    <td>{r.date.format("%d/%m/%Y").to_string()}</td>
                                    <td>{format!("{} ({})", r.asset_name, r.category)}</td>
                                    <td>{r.project_name.clone()}</td>
                                    <td>{r.kkks_name.clone()}</td>
                                    <td class="num">{r.hps.clone()}</td>
                                    <td>{status_view(r.status)}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
