use leptos::prelude::*;

/// Пункт чек-листа. `required` подсвечивает обязательный пункт,
/// пока он не отмечен.
#[component]
pub fn CheckItem(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<()>>,
    #[prop(optional, into)] required: MaybeProp<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let item_class = move || {
        let mut class = String::from("checklist__item");
        if checked.get() {
            class.push_str(" checklist__item--done");
        } else if required.get().unwrap_or(false) {
            class.push_str(" checklist__item--missing");
        }
        class
    };

    view! {
        <label class=item_class>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |_| {
                    if let Some(handler) = on_toggle {
                        handler.run(());
                    }
                }
            />
            <span>{label}</span>
            <Show when=move || required.get().unwrap_or(false)>
                <span class="checklist__tag">"Wajib"</span>
            </Show>
        </label>
    }
}
