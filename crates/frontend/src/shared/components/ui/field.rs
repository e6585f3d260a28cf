use leptos::prelude::*;

/// Текстовое поле с подписью и необязательной единицей измерения
#[component]
pub fn TextField(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Единица измерения, показывается справа от поля
    #[prop(optional, into)]
    unit: MaybeProp<String>,
    /// Числовое поле: включает десятичную клавиатуру на мобильных
    #[prop(optional)]
    numeric: bool,
    /// "text" по умолчанию; "date", "email" и т.п.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let kind = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let mode = if numeric { "decimal" } else { "text" };

    view! {
        <label class="form__group">
            {move || label.get().map(|l| view! {
                <span class="form__label">
                    {l}
                    {required.then_some(view! { <span class="form__required">" *"</span> })}
                </span>
            })}
            <span class="form__input-row">
                <input
                    class="form__input"
                    type=kind
                    inputmode=mode
                    prop:value=move || value.get()
                    placeholder=move || placeholder.get().unwrap_or_default()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                {move || unit.get().map(|u| view! { <span class="form__unit">{u}</span> })}
            </span>
        </label>
    }
}
