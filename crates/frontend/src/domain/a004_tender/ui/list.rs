use contracts::domain::a004_tender::{BidStatus, TenderStatus, TenderView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

use crate::domain::a004_tender::api;

fn tender_badge(status: TenderStatus) -> impl IntoView {
    let (label, color) = match status {
        TenderStatus::Draft => ("Draft", BadgeColor::Subtle),
        TenderStatus::Published => ("Dipublikasikan", BadgeColor::Brand),
        TenderStatus::Closed => ("Ditutup", BadgeColor::Success),
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge> }
}

fn bid_status_label(status: BidStatus) -> &'static str {
    match status {
        BidStatus::Submitted => "Diajukan",
        BidStatus::Review => "Evaluasi",
    }
}

#[component]
fn TenderCard(tender: TenderView) -> impl IntoView {
    let opening = tender
        .bid_opening_date
        .map(|d| d.format("%d/%m/%Y %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".into());
    let seal_note = if tender.bids_open {
        "Penawaran dibuka"
    } else {
        "Penawaran tersegel sampai jadwal pembukaan"
    };

    view! {
        <div class="card tender">
            <div class="tender__header">
                <strong>{tender.id.clone()} " · " {tender.name.clone()}</strong>
                {tender_badge(tender.status)}
            </div>
            <p>{tender.description.clone()}</p>
            <div>"Nilai paket: " {tender.total_value.clone()}</div>
            <div>"Pembukaan penawaran: " {opening}</div>
            <div class="tender__seal">{seal_note}</div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Vendor"</th>
                        <th>"Nilai Penawaran"</th>
                        <th>"Tanggal"</th>
                        <th>"Status"</th>
                        <th>"Kepatuhan"</th>
                    </tr>
                </thead>
                <tbody>
                    {tender
                        .bids
                        .into_iter()
                        .map(|bid| view! {
                            <tr>
                                <td>{bid.vendor_name}</td>
                                <td class="num">{bid.amount}</td>
                                <td>{bid.submitted_date.format("%d/%m/%Y").to_string()}</td>
                                <td>{bid_status_label(bid.status)}</td>
                                <td>{bid.compliance_score.map(|s| format!("{}%", s)).unwrap_or_else(|| "-".into())}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn TenderList() -> impl IntoView {
    let tenders = RwSignal::new(Vec::<TenderView>::new());
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_tenders().await {
            Ok(items) => {
                let _ = tenders.try_set(items);
            }
            Err(e) => {
                let _ = error.try_set(Some(e));
            }
        }
        let _ = is_loading.try_set(false);
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Tender"</h2>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !is_loading.get() fallback=|| view! { <Spinner /> }>
                <For
                    each=move || tenders.get()
                    key=|t| t.id.clone()
                    children=|t| view! { <TenderCard tender=t /> }
                />
            </Show>
        </div>
    }
}
