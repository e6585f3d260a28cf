use contracts::system::auth::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonType, Spinner, SpinnerSize};

use crate::shared::components::ui::{RadioGroup, TextField};
use crate::system::auth::context::{do_login, use_auth};

fn role_from_key(key: &str) -> UserRole {
    UserRole::ALL
        .into_iter()
        .find(|r| r.as_str() == key)
        .unwrap_or(UserRole::Vendor)
}

fn default_email(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin@skkmigas.go.id",
        UserRole::Vendor => "vendor@globalsuppliers.co.id",
        UserRole::Technical => "engineer@skkmigas.go.id",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let role = RwSignal::new(UserRole::Vendor);
    let email = RwSignal::new(default_email(UserRole::Vendor).to_string());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let on_role = Callback::new(move |key: String| {
        let next = role_from_key(&key);
        // Подставляем демо-адрес, только если пользователь его не менял
        let current = email.get_untracked();
        if UserRole::ALL.iter().any(|r| default_email(*r) == current) || current.trim().is_empty() {
            email.set(default_email(next).to_string());
        }
        role.set(next);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked();
        if email_val.trim().is_empty() {
            error_message.set(Some("Email wajib diisi".into()));
            return;
        }
        let role_val = role.get_untracked();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(email_val, role_val, set_auth_state).await {
                let _ = error_message.try_set(Some(e));
            }
            let _ = is_loading.try_set(false);
        });
    };

    let role_options: Vec<(String, String)> = UserRole::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SKK Migas"</h1>
                <h2>"Masuk ke Katalog Aset"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <RadioGroup
                        label="Masuk sebagai"
                        name="role"
                        value=Signal::derive(move || role.get().as_str().to_string())
                        on_change=on_role
                        options=role_options
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=Callback::new(move |v: String| email.set(v))
                        disabled=is_loading
                        required=true
                    />
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=is_loading
                    >
                        "Masuk"
                    </Button>
                    <Show when=move || is_loading.get()>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
                </form>
            </div>
        </div>
    }
}
