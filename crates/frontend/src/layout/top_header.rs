use crate::layout::global_context::use_global_context;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();

    let user_line = move || {
        auth_state
            .get()
            .user_info
            .map(|u| format!("{} · {}", u.name, u.role.label()))
            .unwrap_or_default()
    };
    let avatar = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.avatar)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let token = auth_state.get_untracked().access_token;
        ctx.reset();
        spawn_local(async move {
            do_logout(token, set_auth_state).await;
        });
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>
                "☰"
            </button>
            <span class="top-header__title">"SKK Migas · Katalog Aset"</span>
            <div class="top-header__user">
                <span class="top-header__avatar">{avatar}</span>
                <span>{user_line}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_logout
                >
                    "Keluar"
                </Button>
            </div>
        </header>
    }
}
