use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn FormTextarea(
    #[prop(into)]
    label: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=textarea_placeholder
                rows=3
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
