use contracts::dashboards::d400_verification_board::{partition, BoardColumn, BUCKETS};
use contracts::domain::a001_asset::Asset;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarBody, MessageBarIntent, Spinner, SpinnerSize};

use crate::dashboards::d400_verification_board::api;
use crate::domain::a001_asset::context::use_asset_store;
use crate::domain::a001_asset::ui::status::AssetStatusBadge;

/// Локальная раскладка по клиентской копии, пока backend недоступен
fn local_columns(assets: &[Asset]) -> Vec<BoardColumn<Asset>> {
    partition(assets, &BUCKETS)
        .into_iter()
        .map(|c| BoardColumn {
            status: c.status,
            title: c.title,
            items: c.items.into_iter().cloned().collect(),
        })
        .collect()
}

#[component]
fn AssetCard(asset: Asset) -> impl IntoView {
    view! {
        <div class="board__card">
            <div class="board__card-number">{asset.number.clone()}</div>
            <div class="board__card-name">{asset.name.clone()}</div>
            <div class="board__card-meta">
                <span>{asset.category.as_str()}</span>
                <span>{asset.location.clone()}</span>
            </div>
            <AssetStatusBadge status=asset.status />
        </div>
    }
}

/// Доска верификации: активы по колонкам жизненного цикла
#[component]
pub fn VerificationBoard() -> impl IntoView {
    let store = use_asset_store();
    let (columns, set_columns) = signal(Vec::<BoardColumn<Asset>>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_board().await {
                Ok(data) => {
                    let _ = set_columns.try_set(data);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Failed to load verification board: {}", e);
                    let local = store.assets.with_untracked(|a| local_columns(a));
                    let _ = set_columns.try_set(local);
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    // Новая подача попадает в хранилище: доска перечитывается
    Effect::new(move |_| {
        store.assets.track();
        load();
    });

    view! {
        <div class="page board">
            <div class="page__header">
                <h2>"Papan Verifikasi"</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    "Muat Ulang"
                </Button>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        {format!("Data server tidak tersedia ({}), menampilkan data lokal", e)}
                    </MessageBarBody>
                </MessageBar>
            })}

            <div class="board__columns">
                <For
                    each=move || columns.get()
                    key=|column| {
                        let ids: Vec<String> = column.items.iter().map(|a| a.to_string_id()).collect();
                        (column.status, ids)
                    }
                    children=move |column| {
                        let count = column.items.len();
                        view! {
                            <div class="board__column">
                                <div class="board__column-header">
                                    <span>{column.title.clone()}</span>
                                    <span class="board__count">{count}</span>
                                </div>
                                {if column.items.is_empty() {
                                    view! { <div class="board__empty">"Tidak ada aset"</div> }.into_any()
                                } else {
                                    column
                                        .items
                                        .into_iter()
                                        .map(|asset| view! { <AssetCard asset=asset /> })
                                        .collect_view()
                                        .into_any()
                                }}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_asset::{AssetCategory, AssetId, AssetStatus, Coordinates, SpecMap};
    use contracts::domain::common::EntityMetadata;

    fn asset(name: &str, status: AssetStatus) -> Asset {
        Asset {
            id: AssetId::new_v4(),
            number: name.to_uppercase(),
            name: name.into(),
            category: AssetCategory::Vessel,
            sub_type: None,
            status,
            location: "Batam".into(),
            coordinates: Coordinates::PLACEHOLDER,
            daily_rate: 0.0,
            health: 100.0,
            csms_score: 0.0,
            certification: "BKI Class".into(),
            year_built: 2015,
            capacity: "-".into(),
            manufacturer: "-".into(),
            flag_country: None,
            owner_type: None,
            owner_vendor_id: None,
            imo_number: None,
            specs: SpecMap::new(),
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn local_columns_follow_bucket_order() {
        let assets = vec![
            asset("a", AssetStatus::Active),
            asset("b", AssetStatus::Registered),
            asset("c", AssetStatus::Maintenance),
            asset("d", AssetStatus::Registered),
        ];
        let columns = local_columns(&assets);
        let statuses: Vec<AssetStatus> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, BUCKETS.to_vec());
        let registered: Vec<&str> = columns[0].items.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(registered, vec!["b", "d"]);
        let total: usize = columns.iter().map(|c| c.items.len()).sum();
        assert_eq!(total, 3);
    }
}
