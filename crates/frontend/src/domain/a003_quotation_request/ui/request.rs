use chrono::NaiveDate;
use contracts::domain::a003_quotation_request::{
    estimate_hps, format_hps, rental_days, CreateQuotationRequest,
};
use contracts::shared::format::format_idr;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarBody, MessageBarIntent, Spinner};

use crate::domain::a001_asset::context::use_asset_store;
use crate::domain::a003_quotation_request::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::TextField;
use crate::system::auth::context::current_token;

/// Дата из `<input type="date">`; пустое или неполное значение - `None`
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn QuotationRequestForm(asset_id: String) -> impl IntoView {
    let store = use_asset_store();
    let ctx = use_global_context();
    let token = current_token();

    let asset_for_view = asset_id.clone();
    let asset = Memo::new(move |_| store.find(&asset_for_view));

    let form = RwSignal::new(CreateQuotationRequest {
        asset_id: asset_id.clone(),
        ..Default::default()
    });
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let is_saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let created = RwSignal::new(Option::<String>::None);

    let hps_preview = move || {
        let rate = asset.with(|a| a.as_ref().map(|a| a.daily_rate)).unwrap_or(0.0);
        let from = parse_date(&date_from.get());
        let to = parse_date(&date_to.get());
        let days = from.zip(to).map(|(f, t)| rental_days(f, t));
        let hps = format_hps(estimate_hps(from, to, rate));
        match days {
            Some(days) => format!("{} ({} hari × {})", hps, days, format_idr(rate)),
            None => hps,
        }
    };

    let field = move |getter: fn(&CreateQuotationRequest) -> String,
                      setter: fn(&mut CreateQuotationRequest, String)| {
        (
            Signal::derive(move || form.with(getter)),
            Callback::new(move |v: String| form.update(|f| setter(f, v))),
        )
    };
    let (project, on_project) = field(|f| f.project_name.clone(), |f, v| f.project_name = v);
    let (kkks, on_kkks) = field(|f| f.kkks_name.clone(), |f, v| f.kkks_name = v);
    let (contact, on_contact) = field(|f| f.contact_name.clone(), |f, v| f.contact_name = v);
    let (email, on_email) = field(|f| f.contact_email.clone(), |f, v| f.contact_email = v);
    let (phone, on_phone) = field(|f| f.contact_number.clone(), |f, v| f.contact_number = v);

    let on_submit = move |_| {
        if is_saving.get_untracked() {
            return;
        }
        let Some(token) = token.clone() else {
            error.set(Some("Sesi tidak ditemukan".into()));
            return;
        };
        let mut dto = form.get_untracked();
        dto.date_from = parse_date(&date_from.get_untracked());
        dto.date_to = parse_date(&date_to.get_untracked());
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }

        is_saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::create_request(&token, &dto).await {
                Ok(request) => {
                    log::info!("quotation request {} created", request.id);
                    let _ = created.try_set(Some(format!("{} · HPS {}", request.id, request.hps)));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = is_saving.try_set(false);
        });
    };

    let open_list = move |_| {
        let key = "a003_quotation_request";
        ctx.open_tab(key, &tab_label_for_key(key));
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Permintaan Penawaran (Market Assessment)"</h2>
            </div>

            {move || match asset.get() {
                Some(a) => view! {
                    <div class="card">
                        <strong>{a.name.clone()}</strong>
                        " · " {a.category.as_str()} " · " {a.number.clone()}
                        <div>"Tarif harian: " {format_idr(a.daily_rate)}</div>
                    </div>
                }.into_any(),
                None => view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>"Aset tidak ditemukan di katalog"</MessageBarBody>
                    </MessageBar>
                }.into_any(),
            }}

            <Show
                when=move || created.get().is_none()
                fallback=move || view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <MessageBarBody>
                            "Permintaan terkirim: " {move || created.get().unwrap_or_default()}
                        </MessageBarBody>
                    </MessageBar>
                    <Button on_click=open_list>"Lihat Daftar Permintaan"</Button>
                }
            >
                <div class="form">
                    <TextField label="Nama Proyek" value=project on_input=on_project required=true />
                    <TextField label="Nama KKKS" value=kkks on_input=on_kkks required=true />
                    <TextField label="Nama Kontak" value=contact on_input=on_contact required=true />
                    <TextField label="Email Kontak" input_type="email" value=email on_input=on_email required=true />
                    <TextField label="Nomor Kontak" value=phone on_input=on_phone />
                    <TextField
                        label="Mulai Sewa"
                        input_type="date"
                        value=date_from
                        on_input=Callback::new(move |v: String| date_from.set(v))
                    />
                    <TextField
                        label="Selesai Sewa"
                        input_type="date"
                        value=date_to
                        on_input=Callback::new(move |v: String| date_to.set(v))
                    />
                    <label class="form__group">
                        <span class="form__label">"Informasi Tambahan"</span>
                        <textarea
                            class="form__textarea"
                            prop:value=move || form.with(|f| f.additional_info.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.additional_info = Some(v));
                            }
                        ></textarea>
                    </label>

                    <div class="hps-preview">
                        <span>"Estimasi HPS: "</span>
                        <strong>{hps_preview}</strong>
                    </div>

                    {move || error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{e}</MessageBarBody>
                        </MessageBar>
                    })}

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_saving.get() || asset.with(|a| a.is_none()))
                        on_click=on_submit.clone()
                    >
                        "Kirim Permintaan"
                    </Button>
                    <Show when=move || is_saving.get()>
                        <Spinner />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_values_parse() {
        assert_eq!(parse_date("2026-03-01"), NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2026-03"), None);
    }
}
