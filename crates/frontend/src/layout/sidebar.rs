//! Боковое меню. Пункты фильтруются по роли текущего пользователя.

use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::system::auth::context::use_auth;
use contracts::system::auth::UserRole;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    /// (ключ вкладки, роли, которым пункт доступен)
    items: Vec<(&'static str, &'static [UserRole])>,
}

const EVERYONE: &[UserRole] = &[UserRole::Admin, UserRole::Vendor, UserRole::Technical];
const ADMIN: &[UserRole] = &[UserRole::Admin];
const SUBMITTERS: &[UserRole] = &[UserRole::Admin, UserRole::Vendor];

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            items: vec![
                ("d400_verification_board", EVERYONE),
                ("d401_asset_comparison", EVERYONE),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "Katalog",
            items: vec![("a001_asset", EVERYONE), ("u501_asset_submission", SUBMITTERS)],
        },
        MenuGroup {
            id: "procurement",
            label: "Pengadaan",
            items: vec![
                ("a003_quotation_request", ADMIN),
                ("a004_tender", SUBMITTERS),
                ("a005_contract", SUBMITTERS),
            ],
        },
        MenuGroup {
            id: "master_data",
            label: "Master Data",
            items: vec![("a002_technical_parameter", ADMIN)],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    let visible_groups = move || {
        let role = auth_state.get().user_info.map(|u| u.role);
        let Some(role) = role else {
            return Vec::new();
        };
        menu_groups()
            .into_iter()
            .filter_map(|mut g| {
                g.items.retain(|(_, roles)| roles.contains(&role));
                (!g.items.is_empty()).then_some(g)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            <For
                each=visible_groups
                key=|group| group.id
                children=move |group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-title">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(key, _)| {
                                    let title = tab_label_for_key(key);
                                    let is_active = move || ctx.active.get().as_deref() == Some(key);
                                    let label = title.clone();
                                    view! {
                                        <a
                                            href="#"
                                            class="sidebar__item"
                                            class:active=is_active
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                ctx.open_tab(key, &title);
                                            }
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </nav>
    }
}
