use leptos::prelude::*;

/// Labelled text input with an inline validation message
#[component]
pub fn FormInput(
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Fired when the field loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Message shown under the field; `None` hides it
    #[prop(into, optional)]
    error: Signal<Option<&'static str>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                id=id.clone()
                class="form__input"
                class:form__input--invalid=has_error
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                aria-invalid=move || if has_error() { "true" } else { "false" }
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}
