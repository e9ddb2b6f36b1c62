//! Форма добавления мерчанта
//!
//! Значения и признаки "touched" живут в [`MerchantForm`]; ошибка поля
//! показывается только после потери фокуса или попытки отправки.

use crate::shared::components::ui::{FormInput, FormSelect, FormTextarea};
use contracts::domain::a001_merchant::form::{MerchantForm, MerchantFormField};
use contracts::domain::a001_merchant::{Merchant, MerchantRisk, MerchantStatus};
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    MerchantStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

fn risk_options() -> Vec<(String, String)> {
    MerchantRisk::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

#[component]
pub fn MerchantFormView(
    /// Receives the validated merchant
    on_submit: Callback<Merchant>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(MerchantForm::new());

    let error_of = move |field: MerchantFormField| {
        Signal::derive(move || form.with(|f| f.visible_error(field)))
    };
    let touch = move |field: MerchantFormField| Callback::new(move |_| form.update(|f| f.touch(field)));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.touch_all());
        let result = form.with_untracked(|f| f.to_merchant(None, chrono::Utc::now()));
        match result {
            Ok(merchant) => {
                log::info!("merchant form submitted: {}", merchant.id);
                on_submit.run(merchant);
            }
            Err(errors) => {
                log::debug!("merchant form rejected: {} field(s) invalid", errors.len());
            }
        }
    };

    view! {
        <form class="merchant-form" on:submit=handle_submit novalidate=true>
            <FormInput
                id="merchant-name"
                label="Name"
                placeholder="Merchant name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                on_blur=touch(MerchantFormField::Name)
                error=error_of(MerchantFormField::Name)
            />
            <FormInput
                id="merchant-country"
                label="Country"
                placeholder="US"
                value=Signal::derive(move || form.with(|f| f.country.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.country = v))
                on_blur=touch(MerchantFormField::Country)
                error=error_of(MerchantFormField::Country)
            />
            <div class="form__row">
                <FormInput
                    id="merchant-volume"
                    label="Monthly Volume"
                    input_type="number"
                    placeholder="10000"
                    value=Signal::derive(move || form.with(|f| f.monthly_volume.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.monthly_volume = v))
                    on_blur=touch(MerchantFormField::MonthlyVolume)
                    error=error_of(MerchantFormField::MonthlyVolume)
                />
                <FormInput
                    id="merchant-chargeback"
                    label="Chargeback Ratio (%)"
                    input_type="number"
                    placeholder="0.5"
                    value=Signal::derive(move || form.with(|f| f.chargeback_ratio.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.chargeback_ratio = v))
                    on_blur=touch(MerchantFormField::ChargebackRatio)
                    error=error_of(MerchantFormField::ChargebackRatio)
                />
            </div>
            <div class="form__row">
                <FormSelect
                    id="merchant-status"
                    label="Status"
                    options=status_options()
                    value=Signal::derive(move || form.with(|f| f.status.as_str().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Ok(status) = v.parse::<MerchantStatus>() {
                            form.update(|f| f.status = status);
                        }
                    })
                />
                <FormSelect
                    id="merchant-risk"
                    label="Risk"
                    options=risk_options()
                    value=Signal::derive(move || form.with(|f| f.risk.as_str().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Ok(risk) = v.parse::<MerchantRisk>() {
                            form.update(|f| f.risk = risk);
                        }
                    })
                />
            </div>
            <FormTextarea
                id="merchant-description"
                label="Description"
                placeholder="Optional notes"
                value=Signal::derive(move || form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = v))
            />

            <div class="modal-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <button type="submit" class="button button--primary">
                    "Add Merchant"
                </button>
            </div>
        </form>
    }
}
