use leptos::prelude::*;

/// Группа переключателей. Значение опции - строковый ключ.
#[component]
pub fn RadioGroup(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Атрибут name, общий для группы
    #[prop(into)]
    name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let choices = options
        .into_iter()
        .map(|(key, text)| {
            let key_for_check = key.clone();
            let key_attr = key.clone();
            let name = name.clone();
            view! {
                <label class="form__radio">
                    <input
                        type="radio"
                        name=name
                        value=key_attr
                        prop:checked=move || value.get() == key_for_check
                        disabled=move || disabled.get().unwrap_or(false)
                        on:change=move |_| {
                            if let Some(handler) = on_change {
                                handler.run(key.clone());
                            }
                        }
                    />
                    <span>{text}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="form__group form__radio-group">
            {move || label.get().map(|l| view! { <legend class="form__label">{l}</legend> })}
            {choices}
        </fieldset>
    }
}
