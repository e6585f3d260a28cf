use chrono::{NaiveDate, Utc};
use contracts::domain::a005_contract::{Contract, ContractStatus, Milestone, MilestoneStatus};
use contracts::shared::format::format_idr;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

use crate::domain::a005_contract::api;

fn contract_badge(status: ContractStatus) -> impl IntoView {
    let (label, color) = match status {
        ContractStatus::Active => ("Aktif", BadgeColor::Success),
        ContractStatus::Completed => ("Selesai", BadgeColor::Brand),
        ContractStatus::Disputed => ("Sengketa", BadgeColor::Danger),
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge> }
}

fn milestone_label(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Completed => "Selesai",
        MilestoneStatus::InProgress => "Berjalan",
        MilestoneStatus::Pending => "Menunggu",
        MilestoneStatus::Delayed => "Terlambat",
    }
}

/// CSS-модификатор точки на шкале вех; просроченная веха подсвечивается
/// как задержка, даже если статус еще не обновлен
fn milestone_class(milestone: &Milestone, today: NaiveDate) -> &'static str {
    let late = !milestone.status.is_done() && milestone.target_date < today;
    match milestone.status {
        MilestoneStatus::Completed => "timeline__item timeline__item--done",
        MilestoneStatus::Delayed => "timeline__item timeline__item--late",
        _ if late => "timeline__item timeline__item--late",
        MilestoneStatus::InProgress => "timeline__item timeline__item--active",
        MilestoneStatus::Pending => "timeline__item",
    }
}

#[component]
fn MilestoneTimeline(contract: Contract) -> impl IntoView {
    let today = Utc::now().date_naive();
    let (done, total) = contract.progress();

    view! {
        <div class="card contract__detail">
            <div class="contract__detail-header">
                <strong>"Riwayat & Jejak Audit"</strong>
                <span class="contract__ref">"Ref: " {contract.id.clone()}</span>
            </div>
            <div class="contract__progress">{format!("{} dari {} tahapan selesai", done, total)}</div>
            <div class="contract__hash">"Hash: " {contract.blockchain_hash.clone()}</div>
            <ol class="timeline">
                {contract
                    .milestones
                    .into_iter()
                    .map(|ms| {
                        let class = milestone_class(&ms, today);
                        view! {
                            <li class=class>
                                <div class="timeline__label">{ms.label.clone()}</div>
                                <span class="timeline__status">{milestone_label(ms.status)}</span>
                                <div class="timeline__target">
                                    "Target: " {ms.target_date.format("%d/%m/%Y").to_string()}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

/// Контракты и график их вех
#[component]
pub fn ContractList() -> impl IntoView {
    let contracts = RwSignal::new(Vec::<Contract>::new());
    let selected = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_contracts().await {
            Ok(items) => {
                let _ = contracts.try_set(items);
            }
            Err(e) => {
                log::error!("Failed to load contracts: {}", e);
                let _ = error.try_set(Some(e));
            }
        }
        let _ = is_loading.try_set(false);
    });

    let selected_contract = Memo::new(move |_| {
        let id = selected.get()?;
        contracts.with(|all| all.iter().find(|c| c.id == id).cloned())
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Siklus Kontrak"</h2>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !is_loading.get() fallback=|| view! { <Spinner /> }>
                <div class="contract">
                    <div class="contract__list">
                        <Show
                            when=move || !contracts.with(|c| c.is_empty())
                            fallback=|| view! { <div class="contract__empty">"Belum ada kontrak aktif."</div> }
                        >
                            <For
                                each=move || contracts.get()
                                key=|c| c.id.clone()
                                children=move |c| {
                                    let id = c.id.clone();
                                    let id_for_class = c.id.clone();
                                    let is_selected = move || selected.get().as_deref() == Some(id_for_class.as_str());
                                    view! {
                                        <div
                                            class="card contract__card"
                                            class:selected=is_selected
                                            on:click=move |_| selected.set(Some(id.clone()))
                                        >
                                            <div class="contract__card-header">
                                                <span class="contract__ref">{c.id.clone()}</span>
                                                {contract_badge(c.status)}
                                            </div>
                                            <strong>{c.vendor_name.clone()}</strong>
                                            <div class="contract__meta">
                                                <span>{format!("{} Aset", c.asset_count())}</span>
                                                <span>{c.start_date.format("%d/%m/%Y").to_string()}</span>
                                            </div>
                                            <div class="num">{format_idr(c.total_value)}</div>
                                        </div>
                                    }
                                }
                            />
                        </Show>
                    </div>
                    {move || match selected_contract.get() {
                        Some(contract) => view! { <MilestoneTimeline contract=contract /> }.into_any(),
                        None => view! {
                            <div class="contract__placeholder">
                                "Pilih kontrak untuk melihat tahapan dan riwayat audit."
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}
