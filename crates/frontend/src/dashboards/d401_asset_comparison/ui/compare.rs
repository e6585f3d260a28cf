use contracts::dashboards::d401_asset_comparison::{CompareResponse, CompareStats};
use contracts::domain::a001_asset::Asset;
use contracts::shared::format::format_idr;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize, MessageBar, MessageBarBody, MessageBarIntent, Spinner, SpinnerSize};

use crate::dashboards::d401_asset_comparison::api;
use crate::domain::a001_asset::ui::status::AssetStatusBadge;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;

/// Какие показатели актива лучшие в выборке
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Highlights {
    cheapest: bool,
    newest: bool,
    healthiest: bool,
}

fn highlights(asset: &Asset, stats: &CompareStats) -> Highlights {
    Highlights {
        cheapest: asset.daily_rate == stats.min_rate,
        newest: asset.year_built == stats.max_year,
        healthiest: asset.health == stats.max_health,
    }
}

fn cell_class(best: bool) -> &'static str {
    if best {
        "num compare__best"
    } else {
        "num"
    }
}

#[component]
fn CompareRow(asset: Asset, stats: CompareStats) -> impl IntoView {
    let ctx = use_global_context();
    let marks = highlights(&asset, &stats);
    let id = asset.to_string_id();

    view! {
        <tr>
            <td>
                <div class="compare__name">{asset.name.clone()}</div>
                <div class="compare__number">{asset.number.clone()}</div>
            </td>
            <td><AssetStatusBadge status=asset.status /></td>
            <td class=cell_class(marks.cheapest)>{format_idr(asset.daily_rate)}</td>
            <td class=cell_class(marks.newest)>{asset.year_built}</td>
            <td class=cell_class(marks.healthiest)>{format!("{}%", asset.health)}</td>
            <td>{asset.certification.clone()}</td>
            <td>{asset.capacity.clone()}</td>
            <td>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctx.toggle_compare(&id)
                >
                    "Hapus"
                </Button>
            </td>
        </tr>
    }
}

/// Сравнение отмеченных в каталоге активов
#[component]
pub fn AssetComparison() -> impl IntoView {
    let ctx = use_global_context();
    let (data, set_data) = signal(None::<CompareResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Выборка меняется из каталога: сравнение пересчитывается
    Effect::new(move |_| {
        let ids = ctx.compare_selection.get();
        if ids.is_empty() {
            set_data.set(None);
            set_error.set(None);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::compare(&ids).await {
                Ok(response) => {
                    let _ = set_data.try_set(Some(response));
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Failed to compare assets {:?}: {}", ids, e);
                    let _ = set_data.try_set(None);
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let open_catalog = move |_| {
        let key = "a001_asset";
        ctx.open_tab(key, &tab_label_for_key(key));
    };

    view! {
        <div class="page compare">
            <div class="page__header">
                <h2>"Perbandingan Aset"</h2>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>

            <Show
                when=move || !ctx.compare_selection.with(|s| s.is_empty())
                fallback=move || view! {
                    <MessageBar intent=MessageBarIntent::Info>
                        <MessageBarBody>
                            "Belum ada aset yang dipilih. Tandai aset di katalog untuk dibandingkan."
                        </MessageBarBody>
                    </MessageBar>
                    <Button appearance=ButtonAppearance::Primary on_click=open_catalog>
                        "Buka Katalog"
                    </Button>
                }
            >
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}

                {move || data.get().map(|response| {
                    let CompareResponse { assets, stats, recommendation } = response;
                    view! {
                        <div class="compare__recommendation">
                            <div class="compare__winner">
                                "Rekomendasi: " <strong>{recommendation.winner}</strong>
                            </div>
                            <div class="compare__reasoning">{recommendation.reasoning}</div>
                        </div>
                        <div class="compare__stats">
                            <span>"Tarif terendah: " {format_idr(stats.min_rate)}</span>
                            <span>"Tahun terbaru: " {stats.max_year}</span>
                            <span>{format!("Kesehatan tertinggi: {}%", stats.max_health)}</span>
                        </div>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Aset"</th>
                                    <th>"Status"</th>
                                    <th>"Tarif Harian"</th>
                                    <th>"Tahun"</th>
                                    <th>"Kesehatan"</th>
                                    <th>"Sertifikasi"</th>
                                    <th>"Kapasitas"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {assets
                                    .into_iter()
                                    .map(|asset| view! { <CompareRow asset=asset stats=stats /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                })}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_asset::{AssetCategory, AssetId, AssetStatus, Coordinates, SpecMap};
    use contracts::domain::common::EntityMetadata;

    fn asset(rate: f64, year: i32, health: f64) -> Asset {
        Asset {
            id: AssetId::new_v4(),
            number: "RG-1".into(),
            name: "Rig".into(),
            category: AssetCategory::OffshoreRig,
            sub_type: None,
            status: AssetStatus::Active,
            location: "Natuna".into(),
            coordinates: Coordinates::PLACEHOLDER,
            daily_rate: rate,
            health,
            csms_score: 80.0,
            certification: "ABS".into(),
            year_built: year,
            capacity: "3000 HP".into(),
            manufacturer: "Keppel".into(),
            flag_country: None,
            owner_type: None,
            owner_vendor_id: None,
            imo_number: None,
            specs: SpecMap::new(),
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn best_values_are_highlighted() {
        let stats = CompareStats {
            min_rate: 150_000_000.0,
            max_year: 2018,
            max_health: 98.0,
        };
        let marks = highlights(&asset(150_000_000.0, 2015, 98.0), &stats);
        assert_eq!(
            marks,
            Highlights {
                cheapest: true,
                newest: false,
                healthiest: true
            }
        );
        assert_eq!(highlights(&asset(1.0e9, 2010, 50.0), &stats), Highlights::default());
    }
}
