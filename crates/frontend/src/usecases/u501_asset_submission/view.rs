use contracts::domain::a001_asset::AssetCategory;
use contracts::shared::dynamic_form::build_layout;
use contracts::usecases::u501_asset_submission::{
    DocumentKind, OwnershipType, PriorityTier, VerificationMode, WizardStep,
};
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, Button, ButtonAppearance, MessageBar, MessageBarBody,
    MessageBarIntent, Spinner, SpinnerSize,
};

use super::dynamic_form::DynamicSpecForm;
use super::view_model::SubmissionViewModel;
use crate::domain::a001_asset::context::use_asset_store;
use crate::domain::a002_technical_parameter::context::use_master_data;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::{CheckItem, RadioGroup, Select, TextField};
use crate::system::auth::context::use_auth;

const TAB_KEY: &str = "u501_asset_submission";

fn mode_key(mode: VerificationMode) -> &'static str {
    match mode {
        VerificationMode::RegistryBacked => "bki",
        VerificationMode::NonRegistry => "non_bki",
    }
}

fn mode_from_key(key: &str) -> VerificationMode {
    match key {
        "non_bki" => VerificationMode::NonRegistry,
        _ => VerificationMode::RegistryBacked,
    }
}

fn ownership_key(value: OwnershipType) -> &'static str {
    match value {
        OwnershipType::Owner => "owner",
        OwnershipType::Operator => "operator",
    }
}

fn ownership_from_key(key: &str) -> OwnershipType {
    match key {
        "operator" => OwnershipType::Operator,
        _ => OwnershipType::Owner,
    }
}

fn tier_key(tier: PriorityTier) -> &'static str {
    match tier {
        PriorityTier::Tier1 => "1",
        PriorityTier::Tier2 => "2",
        PriorityTier::Tier3 => "3",
    }
}

fn tier_from_key(key: &str) -> PriorityTier {
    PriorityTier::ALL
        .into_iter()
        .find(|t| tier_key(*t) == key)
        .unwrap_or_default()
}

/// Индикатор шагов 1-2
#[component]
fn StepIndicator(vm: SubmissionViewModel) -> impl IntoView {
    let ordinal = move || vm.wizard.with(|w| w.step().ordinal());
    let step_class = move |n: u8| {
        move || {
            let current = ordinal();
            if current > n {
                "wizard__step wizard__step--done"
            } else if current == n {
                "wizard__step wizard__step--active"
            } else {
                "wizard__step"
            }
        }
    };
    view! {
        <ol class="wizard__steps">
            <li class=step_class(1)>"1. Klasifikasi & Data Teknis"</li>
            <li class=step_class(2)>"2. Kepemilikan & Dokumen"</li>
        </ol>
    }
}

#[component]
fn ClassificationStep(vm: SubmissionViewModel) -> impl IntoView {
    let master = use_master_data();

    let category = Memo::new(move |_| vm.wizard.with(|w| w.category()));
    let mode = Memo::new(move |_| vm.wizard.with(|w| w.verification_mode()));
    let lookup_applicable = Memo::new(move |_| vm.wizard.with(|w| w.lookup_applicable()));
    let is_pending = Memo::new(move |_| vm.wizard.with(|w| w.is_lookup_pending()));
    let layout = Memo::new(move |_| master.registry.with(|r| build_layout(category.get(), r)));
    let specs = Signal::derive(move || vm.wizard.with(|w| w.dynamic_specs().clone()));
    let record = Memo::new(move |_| vm.wizard.with(|w| w.bki_record().cloned()));
    let issues = Memo::new(move |_| vm.wizard.with(|w| w.step1_issues()));

    let category_buttons = AssetCategory::ALL
        .into_iter()
        .map(|c| {
            let appearance = Signal::derive(move || {
                if category.get() == c {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Secondary
                }
            });
            view! {
                <Button
                    appearance=appearance
                    disabled=Signal::derive(move || is_pending.get())
                    on_click=move |_| vm.edit(|w| w.set_category(c))
                >
                    {c.as_str()}
                </Button>
            }
        })
        .collect_view();

    let mode_options = vec![
        (mode_key(VerificationMode::RegistryBacked).to_string(), "Klasifikasi BKI".to_string()),
        (mode_key(VerificationMode::NonRegistry).to_string(), "Non-BKI / Asing".to_string()),
    ];

    view! {
        <section class="wizard__section">
            <h3 class="wizard__section-title">"Kategori Aset"</h3>
            <div class="wizard__category">{category_buttons}</div>

            <Show when=move || category.get().is_vessel()>
                <RadioGroup
                    label="Status Klasifikasi".to_string()
                    name="verification_mode"
                    value=Signal::derive(move || mode_key(mode.get()).to_string())
                    options=mode_options.clone()
                    disabled=Signal::derive(move || is_pending.get())
                    on_change=Callback::new(move |key: String| {
                        vm.edit(|w| w.set_verification_mode(mode_from_key(&key)))
                    })
                />
            </Show>

            <Show when=move || lookup_applicable.get()>
                <div class="wizard__lookup">
                    <TextField
                        label="Nomor IMO".to_string()
                        value=Signal::derive(move || vm.wizard.with(|w| w.imo_number().to_string()))
                        placeholder="Contoh: 9737668".to_string()
                        disabled=Signal::derive(move || is_pending.get())
                        required=true
                        on_input=Callback::new(move |v: String| vm.edit(|w| w.set_imo_number(v)))
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_pending.get())
                        on_click=move |_| vm.lookup_command()
                    >
                        {move || if is_pending.get() { "Mencari..." } else { "Cari" }}
                    </Button>
                    <Show when=move || is_pending.get()>
                        <Spinner />
                    </Show>
                </div>
                {move || record.get().map(|r| view! {
                    <div class="wizard__bki-card">
                        <div class="wizard__bki-title">
                            "Data BKI Ditemukan "
                            <Badge appearance=BadgeAppearance::Tint>{r.class_notation.clone()}</Badge>
                        </div>
                        <dl class="wizard__bki-fields">
                            <dt>"Nama Kapal"</dt><dd>{r.name.clone()}</dd>
                            <dt>"Tipe"</dt><dd>{r.vessel_type.clone()}</dd>
                            <dt>"IMO"</dt><dd>{r.imo_number.clone()}</dd>
                            <dt>"Tahun Pembuatan"</dt><dd>{r.year_built}</dd>
                            <dt>"Galangan"</dt><dd>{r.manufacturer.clone()}</dd>
                            <dt>"Bendera"</dt><dd>{r.flag.clone()}</dd>
                        </dl>
                    </div>
                })}
            </Show>

            <Show when=move || !lookup_applicable.get()>
                <Show when=move || category.get().is_vessel()>
                    <MessageBar intent=MessageBarIntent::Warning>
                        <MessageBarBody>
                            "Kapal Non-BKI / berbendera asing memerlukan verifikasi manual dan dokumen tambahan sesuai prioritas kabotase."
                        </MessageBarBody>
                    </MessageBar>
                </Show>
                <div class="wizard__identity">
                    <TextField
                        label="Nama Aset".to_string()
                        value=Signal::derive(move || vm.wizard.with(|w| w.asset_name().to_string()))
                        required=true
                        on_input=Callback::new(move |v: String| vm.edit(|w| w.set_asset_name(v)))
                    />
                    <TextField
                        label="Tipe Aset".to_string()
                        value=Signal::derive(move || vm.wizard.with(|w| w.asset_type().to_string()))
                        on_input=Callback::new(move |v: String| vm.edit(|w| w.set_asset_type(v)))
                    />
                </div>
            </Show>

            <h3 class="wizard__section-title">"Spesifikasi Teknis"</h3>
            <DynamicSpecForm
                layout=layout
                values=specs
                disabled=Signal::derive(move || is_pending.get())
                on_change=Callback::new(move |(field, raw): (String, String)| {
                    vm.edit(|w| w.set_spec_value(&field, raw))
                })
            />

            {move || {
                let issues = issues.get();
                (!issues.is_empty()).then(|| view! {
                    <ul class="wizard__hints">
                        {issues.into_iter().map(|i| view! { <li>{i.message()}</li> }).collect_view()}
                    </ul>
                })
            }}
        </section>
    }
}

#[component]
fn OwnershipStep(vm: SubmissionViewModel) -> impl IntoView {
    let is_manual = Memo::new(move |_| {
        vm.wizard.with(|w| w.verification_mode() == VerificationMode::NonRegistry)
    });
    let required = Memo::new(move |_| vm.wizard.with(|w| w.required_documents()));
    let locked = Signal::derive(move || vm.is_submitting.get());

    let ownership_options = Signal::derive(|| {
        vec![
            (
                ownership_key(OwnershipType::Owner).to_string(),
                "Pemilik (Owner) - Aset Milik Sendiri".to_string(),
            ),
            (
                ownership_key(OwnershipType::Operator).to_string(),
                "Operator (Disewa) - Aset Sewa / Agen".to_string(),
            ),
        ]
    });
    let tier_options = Signal::derive(|| {
        PriorityTier::ALL
            .into_iter()
            .map(|t| (tier_key(t).to_string(), t.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="wizard__section">
            <Select
                label="Status Kepemilikan".to_string()
                value=Signal::derive(move || ownership_key(vm.wizard.with(|w| w.ownership_type())).to_string())
                options=ownership_options
                disabled=locked
                on_change=Callback::new(move |key: String| {
                    vm.edit(|w| w.set_ownership_type(ownership_from_key(&key)))
                })
            />

            <Show when=move || is_manual.get()>
                <Select
                    label="Prioritas Kabotase".to_string()
                    value=Signal::derive(move || tier_key(vm.wizard.with(|w| w.priority_tier())).to_string())
                    options=tier_options
                    disabled=locked
                    on_change=Callback::new(move |key: String| {
                        vm.edit(|w| w.set_priority_tier(tier_from_key(&key)))
                    })
                />
            </Show>

            <h3 class="wizard__section-title">"Dokumen Wajib"</h3>
            <div class="checklist">
                <For
                    each=move || required.get()
                    key=|kind: &DocumentKind| *kind
                    children=move |kind: DocumentKind| {
                        view! {
                            <CheckItem
                                label=kind.label()
                                checked=Signal::derive(move || vm.wizard.with(|w| w.documents().is_checked(kind)))
                                required=true
                                disabled=locked
                                on_toggle=Callback::new(move |_| vm.edit(|w| w.toggle_document(kind)))
                            />
                        }
                    }
                />
            </div>

            {move || {
                let missing = vm.wizard.with(|w| w.missing_documents());
                (!missing.is_empty()).then(|| view! {
                    <p class="wizard__hint">
                        {format!("{} dokumen wajib belum diunggah", missing.len())}
                    </p>
                })
            }}
        </section>
    }
}

/// Мастер подачи данных актива вендором
#[component]
pub fn SubmissionWizardPage() -> impl IntoView {
    let ctx = use_global_context();
    let master = use_master_data();
    let store = use_asset_store();
    let (auth_state, _) = use_auth();

    let vm = SubmissionViewModel::new();
    vm.load_policy();

    // Вкладка закрыта: незавершенный поиск будет отброшен
    on_cleanup(move || vm.close_command());

    let step = Memo::new(move |_| vm.wizard.with(|w| w.step()));
    let can_proceed = Memo::new(move |_| vm.wizard.with(|w| w.validate_step1()));
    let can_submit = Memo::new(move |_| vm.wizard.with(|w| w.can_submit()));

    let on_cancel = move |_| {
        vm.close_command();
        ctx.close_tab(TAB_KEY);
    };

    let on_submit = move |_| {
        let state = auth_state.get_untracked();
        master.registry.with_untracked(|registry| {
            vm.submit_command(registry, state.user_info, state.access_token, store)
        });
    };

    let open_catalog = move |_| {
        let key = "a001_asset";
        ctx.open_tab(key, &tab_label_for_key(key));
    };

    view! {
        <div class="page wizard">
            <div class="page__header">
                <h2>"Pengajuan Data Produk"</h2>
            </div>

            <Show
                when=move || vm.policy_loaded.get()
                fallback=|| view! { <Spinner size=SpinnerSize::Small /> }
            >
                <Show
                    when=move || step.get() != WizardStep::Completed
                    fallback=move || view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <MessageBarBody>
                                {move || vm.submitted.get().map(|a| format!(
                                    "Aset {} berhasil diajukan dengan nomor {}. Status: Menunggu Verifikasi.",
                                    a.name, a.number
                                ))}
                            </MessageBarBody>
                        </MessageBar>
                        <div class="wizard__footer">
                            <Button on_click=open_catalog>"Lihat Katalog"</Button>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.restart()>
                                "Ajukan Aset Lain"
                            </Button>
                        </div>
                    }
                >
                    <StepIndicator vm=vm />

                    {move || vm.notice.get().map(|n| view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <MessageBarBody>{n}</MessageBarBody>
                        </MessageBar>
                    })}
                    {move || vm.error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{e}</MessageBarBody>
                        </MessageBar>
                    })}

                    <Show
                        when=move || step.get() == WizardStep::OwnershipAndDocs
                        fallback=move || view! { <ClassificationStep vm=vm /> }
                    >
                        <OwnershipStep vm=vm />
                    </Show>

                    <div class="wizard__footer">
                        <Show
                            when=move || step.get() == WizardStep::OwnershipAndDocs
                            fallback=move || view! {
                                <Button on_click=on_cancel>"Batal"</Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !can_proceed.get())
                                    on_click=move |_| vm.next_command()
                                >
                                    "Lanjut"
                                </Button>
                            }
                        >
                            <Button
                                disabled=Signal::derive(move || vm.is_submitting.get())
                                on_click=move |_| vm.back_command()
                            >
                                "Kembali"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || !can_submit.get() || vm.is_submitting.get())
                                on_click=on_submit
                            >
                                "Kirim Pengajuan"
                            </Button>
                            <Show when=move || vm.is_submitting.get()>
                                <Spinner />
                            </Show>
                        </Show>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keys_map_back_to_values() {
        for tier in PriorityTier::ALL {
            assert_eq!(tier_from_key(tier_key(tier)), tier);
        }
        assert_eq!(ownership_from_key("operator"), OwnershipType::Operator);
        assert_eq!(ownership_from_key("unknown"), OwnershipType::Owner);
        assert_eq!(mode_from_key("non_bki"), VerificationMode::NonRegistry);
        assert_eq!(mode_from_key(mode_key(VerificationMode::RegistryBacked)), VerificationMode::RegistryBacked);
    }
}
