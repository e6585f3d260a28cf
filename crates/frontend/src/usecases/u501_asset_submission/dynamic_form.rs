use contracts::domain::a002_technical_parameter::{ParameterType, TechnicalParameter};
use contracts::shared::dynamic_form::{DynamicSpecValues, FormLayout};
use leptos::prelude::*;

use crate::shared::components::ui::TextField;

/// Поле формы по описанию параметра. Единица не дублируется, если
/// она уже есть в подписи.
fn spec_field(
    param: TechnicalParameter,
    values: Signal<DynamicSpecValues>,
    on_change: Callback<(String, String)>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let field = param.field.clone();
    let value = Signal::derive({
        let field = field.clone();
        move || values.with(|v| v.get(&field).to_string())
    });
    let numeric = param.param_type == ParameterType::Number;
    let unit = param
        .unit
        .clone()
        .filter(|u| !param.label.contains(u.as_str()));
    let placeholder = if numeric { "0" } else { "" }.to_string();

    view! {
        <TextField
            label=param.label.clone()
            value=value
            unit=unit
            numeric=numeric
            placeholder=placeholder
            disabled=disabled
            on_input=Callback::new(move |raw: String| on_change.run((field.clone(), raw)))
        />
    }
}

/// Технические характеристики категории, сгруппированные по `group`.
///
/// Набор полей целиком определяется раскладкой; компонент ничего не
/// знает о конкретных категориях.
#[component]
pub fn DynamicSpecForm(
    #[prop(into)] layout: Signal<FormLayout>,
    #[prop(into)] values: Signal<DynamicSpecValues>,
    on_change: Callback<(String, String)>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get().unwrap_or(false));

    view! {
        <div class="spec-form">
            {move || {
                let layout = layout.get();
                if layout.is_empty() {
                    return view! {
                        <p class="spec-form__empty">
                            "Belum ada parameter teknis untuk kategori ini."
                        </p>
                    }
                        .into_any();
                }
                layout
                    .groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <fieldset class="spec-form__group">
                                <legend class="spec-form__legend">{group.name.clone()}</legend>
                                <div class="spec-form__grid">
                                    {group
                                        .parameters
                                        .into_iter()
                                        .map(|param| spec_field(param, values, on_change, disabled))
                                        .collect_view()}
                                </div>
                            </fieldset>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
