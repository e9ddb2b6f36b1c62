use super::view_model::MerchantDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::{RiskBadge, StatusBadge};
use crate::shared::modal::Modal;
use crate::shared::state::use_merchants;
use contracts::domain::a001_merchant::{Merchant, MerchantId, MerchantRisk, MerchantStatus};
use contracts::shared::format::{format_percent, format_volume};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MerchantDetails(id: MerchantId) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_merchants();
    let payload = ctx.nav_payload.get_untracked();
    let vm = MerchantDetailsViewModel::new(id, payload, store);
    let save_ms = ctx.with_config(|c| c.latency.save_ms);

    let close = Callback::new(move |_| ctx.navigate(AppRoute::Merchants));
    let title = Signal::derive(move || {
        match vm.merchant.with(|m| m.as_ref().map(|m| m.name.clone())) {
            Some(name) => name,
            None if store.with(|s| s.is_loading()) => "Loading...".to_string(),
            None => "Merchant not found".to_string(),
        }
    });

    view! {
        <Modal title=title on_close=close>
            {move || match vm.merchant.get() {
                Some(merchant) => view! {
                    <MerchantCard merchant=merchant vm=vm />
                    <div class="modal-actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.saving.get() || vm.is_pending_activation())
                            on_click=move |_| vm.save_command(save_ms)
                        >
                            {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </div>
                }.into_any(),
                None if store.with(|s| s.is_loading()) => view! {
                    <div class="details-loading">
                        <Spinner />
                    </div>
                }.into_any(),
                None => view! {
                    <div class="details-not-found">
                        <p>{format!("No merchant with id {}.", vm.merchant_id())}</p>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| close.run(())>
                            "Back to merchants"
                        </Button>
                    </div>
                }.into_any(),
            }}
        </Modal>

        <Show when=move || vm.show_success.get()>
            <Modal
                title="Success".to_string()
                on_close=Callback::new(move |_| vm.show_success.set(false))
            >
                <p>"Saved successfully."</p>
                <div class="modal-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            vm.show_success.set(false);
                            ctx.navigate(AppRoute::Merchants);
                        }
                    >
                        "OK"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}

/// Текст и цвет chargeback берутся из одного `chargeback_ratio`
fn chargeback_fact(merchant: &Merchant) -> (String, &'static str) {
    (
        format_percent(merchant.chargeback_ratio),
        merchant.chargeback_severity().css_class(),
    )
}

#[component]
fn MerchantCard(merchant: Merchant, vm: MerchantDetailsViewModel) -> impl IntoView {
    let (chargeback_text, severity_class) = chargeback_fact(&merchant);
    let description = merchant
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());

    view! {
        <div class="merchant-details">
            <p class="merchant-details__description">{description}</p>

            <dl class="merchant-details__facts">
                <dt>"Country"</dt>
                <dd>{merchant.country.clone()}</dd>
                <dt>"Monthly Volume"</dt>
                <dd>{format_volume(merchant.monthly_volume)}</dd>
                <dt>"Chargeback"</dt>
                <dd class=severity_class>{chargeback_text}</dd>
                {merchant.success_rate.map(|rate| view! {
                    <dt>"Success Rate"</dt>
                    <dd>{format_percent(rate)}</dd>
                })}
                <dt>"Current"</dt>
                <dd>
                    <StatusBadge status=merchant.status />
                    " "
                    <RiskBadge risk=merchant.risk />
                </dd>
            </dl>

            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="form__group">
                <label class="form__label">"Status"</label>
                <RadioGroup value=vm.status_value>
                    {MerchantStatus::ALL.into_iter().map(|s| view! {
                        <Radio value=s.as_str() label=s.label() />
                    }).collect_view()}
                </RadioGroup>
            </div>

            <Show when=move || vm.is_pending_activation()>
                <MessageBar intent=MessageBarIntent::Warning>
                    <div class="confirm-box">
                        <span>"This merchant is high-risk. Confirm activation?"</span>
                        <Button
                            appearance=ButtonAppearance::Primary
                            size=ButtonSize::Small
                            on_click=move |_| vm.confirm_activation()
                        >
                            "Confirm"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| vm.cancel_activation()
                        >
                            "Cancel"
                        </Button>
                    </div>
                </MessageBar>
            </Show>

            <div class="form__group">
                <label class="form__label">"Risk"</label>
                <RadioGroup value=vm.risk_value>
                    {MerchantRisk::ALL.into_iter().map(|r| view! {
                        <Radio value=r.as_str() label=r.label() />
                    }).collect_view()}
                </RadioGroup>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chargeback_fact_uses_ratio_for_text_and_colour() {
        let mut legacy = Merchant::new(MerchantId::new("old"), "Legacy", "US", 100.0, 0.0);
        legacy.chargeback_rate = Some(3.0);
        assert_eq!(chargeback_fact(&legacy), ("0.0%".to_string(), "text-success"));

        let risky = Merchant::new(MerchantId::new("r"), "Risky", "US", 100.0, 2.5);
        assert_eq!(chargeback_fact(&risky), ("2.5%".to_string(), "text-error"));
    }
}
