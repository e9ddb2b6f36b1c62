use contracts::domain::a001_merchant::{MerchantRisk, MerchantStatus};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Status pill: active/paused/blocked
#[component]
pub fn StatusBadge(status: MerchantStatus) -> impl IntoView {
    view! {
        <Badge variant=status.badge_variant().to_string()>
            {status.as_str()}
        </Badge>
    }
}

#[component]
pub fn RiskBadge(risk: MerchantRisk) -> impl IntoView {
    view! {
        <Badge variant=risk.badge_variant().to_string() class="badge--risk".to_string()>
            {risk.as_str()}
        </Badge>
    }
}
