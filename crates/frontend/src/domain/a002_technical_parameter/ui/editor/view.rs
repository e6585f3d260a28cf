use contracts::domain::a001_asset::AssetCategory;
use contracts::domain::a002_technical_parameter::defaults::DEFAULT_GROUP;
use contracts::domain::a002_technical_parameter::ParameterType;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, MessageBar, MessageBarBody, MessageBarIntent, Spinner};

use super::view_model::ParameterEditorViewModel;
use crate::domain::a002_technical_parameter::context::use_master_data;
use crate::shared::components::ui::Select;
use crate::system::auth::context::use_auth;

fn type_label(kind: ParameterType) -> &'static str {
    match kind {
        ParameterType::Number => "Angka",
        ParameterType::String => "Teks",
    }
}

#[component]
pub fn ParameterEditor() -> impl IntoView {
    let vm = ParameterEditorViewModel::new(use_master_data());
    let (auth_state, _) = use_auth();
    vm.load_library();

    let is_admin = move || auth_state.with(|s| s.user_info.as_ref().is_some_and(|u| u.is_admin()));

    let category_options: Vec<(String, String)> = AssetCategory::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect();
    let on_category = Callback::new(move |raw: String| {
        if let Some(category) = AssetCategory::from_str(&raw) {
            vm.select_category(category);
        }
    });

    let library_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "+ Tambah dari pustaka...".to_string())];
        options.extend(vm.library.get().into_iter().map(|p| {
            let label = format!("{} [{}]", p.display_label(), p.field);
            (p.id, label)
        }));
        options
    });
    let on_add = Callback::new(move |id: String| {
        if !id.is_empty() {
            vm.add_from_library(&id);
        }
    });

    let on_save = move |_| vm.save_command(auth_state.get_untracked().access_token);

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Parameter Teknis per Kategori"</h2>
            </div>

            <Show
                when=is_admin
                fallback=|| view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <MessageBarBody>"Hanya SCM Admin yang dapat mengubah parameter"</MessageBarBody>
                    </MessageBar>
                }
            >
                <div class="editor__toolbar">
                    <Select
                        label="Kategori"
                        value=Signal::derive(move || vm.category.get().as_str().to_string())
                        options=category_options.clone()
                        on_change=on_category
                        disabled=vm.is_saving
                    />
                    <Select
                        label="Pustaka parameter"
                        value=Signal::derive(String::new)
                        options=library_options
                        on_change=on_add
                        disabled=vm.is_saving
                    />
                </div>

                {move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}
                {move || vm.notice.get().map(|n| view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <MessageBarBody>{n}</MessageBarBody>
                    </MessageBar>
                })}
                {move || {
                    let duplicates = vm.duplicates();
                    (!duplicates.is_empty()).then(|| view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <MessageBarBody>
                                "Field ganda, nilai terakhir akan menimpa: " {duplicates.join(", ")}
                            </MessageBarBody>
                        </MessageBar>
                    })
                }}

                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Label"</th>
                            <th>"Field"</th>
                            <th>"Tipe"</th>
                            <th>"Satuan"</th>
                            <th>"Grup"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.draft.get();
                            let last = rows.len().saturating_sub(1);
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, param)| {
                                    let group = param.group.clone().unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td>{index + 1}</td>
                                            <td>{param.label.clone()}</td>
                                            <td><code>{param.field.clone()}</code></td>
                                            <td>{type_label(param.param_type)}</td>
                                            <td>{param.unit.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td>
                                                <input
                                                    class="form__input form__input--compact"
                                                    placeholder=DEFAULT_GROUP
                                                    prop:value=group
                                                    on:change=move |ev| vm.set_group(index, event_target_value(&ev))
                                                />
                                            </td>
                                            <td class="row-actions">
                                                <button disabled={index == 0} on:click=move |_| vm.move_up(index)>"↑"</button>
                                                <button disabled={index == last} on:click=move |_| vm.move_down(index)>"↓"</button>
                                                <button on:click=move |_| vm.remove(index)>"Hapus"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <div class="page__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.is_dirty.get() || vm.is_saving.get())
                        on_click=on_save
                    >
                        "Simpan"
                    </Button>
                    <Button
                        size=ButtonSize::Medium
                        disabled=vm.is_saving
                        on_click=move |_| vm.reset()
                    >
                        "Batalkan Perubahan"
                    </Button>
                    <Show when=move || vm.is_saving.get()>
                        <Spinner />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
