//! Field Input Component
//!
//! Renders the widget matching a field's kind, with the required marker
//! and an inline error underneath.

use bizdesk_core::{FieldKind, FieldSpec};
use leptos::prelude::*;

#[component]
pub fn FieldInput(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let id = format!("field-{}", spec.key);

    let input = match spec.kind {
        FieldKind::LongText => view! {
            <textarea
                id=id.clone()
                rows="2"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Choice(options) => view! {
            <select id=id.clone() on:change=move |ev| on_change.run(event_target_value(&ev))>
                <option value="" selected=move || value.get().is_empty()>
                    {format!("Select {}", spec.label)}
                </option>
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Flag => view! {
            <input
                id=id.clone()
                type="checkbox"
                prop:checked=move || value.get() == "true"
                on:change=move |ev| on_change.run(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                FieldKind::Password => "password",
                _ => "text",
            };
            view! {
                <input
                    id=id.clone()
                    type=input_type
                    step=(kind == FieldKind::Number).then_some("any")
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class=move || if error.get().is_some() { "form-field has-error" } else { "form-field" }>
            <label for=id>
                {spec.label}
                {spec.required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            {input}
            {move || error.get().map(|message| view! { <span class="field-error">{message}</span> })}
        </div>
    }
}
