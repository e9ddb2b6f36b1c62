use leptos::prelude::*;

/// Labelled native select. Options are `(value, label)` pairs.
#[component]
pub fn FormSelect(
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <select
                id=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    let val_for_check = val.clone();
                    let is_selected = move || value.get() == val_for_check;
                    view! {
                        <option value=val selected=is_selected>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
