use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::{RiskBadge, StatusBadge};
use crate::shared::components::{StatCard, StatTone};
use crate::shared::delay::scoped_timeout;
use crate::shared::state::use_merchants;
use contracts::domain::a001_merchant::aggregate::ChargebackSeverity;
use contracts::domain::a001_merchant::stats::{compute_stats, top_by_volume, MerchantStats};
use contracts::domain::a001_merchant::{MerchantRisk, MerchantStatus};
use contracts::shared::format::{format_percent, format_volume_k};
use leptos::prelude::*;
use thaw::*;

const SKELETON_ROWS: usize = 5;

fn chargeback_tone(avg: f64) -> StatTone {
    match ChargebackSeverity::from_ratio(avg) {
        ChargebackSeverity::Normal => StatTone::Success,
        ChargebackSeverity::Elevated => StatTone::Warning,
        ChargebackSeverity::High => StatTone::Error,
    }
}

/// Доля `count` от `total` в процентах для полосок распределения
fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Merchant overview: KPI cards, top merchants and distributions
#[component]
pub fn MerchantOverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_merchants();
    let (dashboard_ms, top_limit) =
        ctx.with_config(|c| (c.latency.dashboard_ms, c.ui.top_merchants_limit));

    // данные нужны сразу, skeleton держится фиксированное время
    store.update(|s| s.initialize());
    let (ready, set_ready) = signal(false);
    scoped_timeout(dashboard_ms, move || set_ready.set(true));

    let stats = Memo::new(move |_| store.with(|s| compute_stats(s.merchants())));
    let merchant_count = Memo::new(move |_| store.with(|s| s.len()));
    let top = Memo::new(move |_| store.with(|s| top_by_volume(s.merchants(), top_limit)));

    // None пока идёт "загрузка"
    let card_value = move |f: fn(&MerchantStats) -> String| {
        Signal::derive(move || ready.get().then(|| stats.with(f)))
    };

    view! {
        <div class="page dashboard-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <Show when=move || ready.get()>
                        <span class="page__subtitle">
                            {move || stats.with(|s| format!(
                                "Active: {} • High risk: {}",
                                s.active_merchants,
                                s.risk_count(MerchantRisk::High)
                            ))}
                        </span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(AppRoute::Merchants)
                    >
                        "Go to Merchants"
                    </Button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Volume"
                    icon_name="volume"
                    value=card_value(|s| format_volume_k(s.total_volume))
                    subtitle=Signal::derive(move || {
                        ready.get().then(|| format!("from {} merchants", merchant_count.get()))
                    })
                />
                <StatCard
                    label="Success Rate"
                    icon_name="activity"
                    value=card_value(|s| format_percent(s.avg_success_rate))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Chargeback"
                    icon_name="percent"
                    value=card_value(|s| format_percent(s.avg_chargeback))
                    tone=Signal::derive(move || stats.with(|s| chargeback_tone(s.avg_chargeback)))
                />
                <StatCard
                    label="High Risk"
                    icon_name="alert"
                    value=card_value(|s| s.risk_count(MerchantRisk::High).to_string())
                    tone=Signal::derive(move || {
                        if stats.with(|s| s.risk_count(MerchantRisk::High)) > 0 {
                            StatTone::Error
                        } else {
                            StatTone::Neutral
                        }
                    })
                />
            </div>

            <div class="dashboard-grid">
                <section class="dashboard-card dashboard-card--wide">
                    <h2 class="dashboard-card__title">"Top Merchants by Volume"</h2>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Merchant"</TableHeaderCell>
                                <TableHeaderCell>"Country"</TableHeaderCell>
                                <TableHeaderCell>"Volume"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Risk"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if !ready.get() {
                                    return (0..SKELETON_ROWS).map(|_| view! {
                                        <TableRow>
                                            {(0..5).map(|_| view! {
                                                <TableCell>
                                                    <span class="skeleton skeleton--text"></span>
                                                </TableCell>
                                            }).collect_view()}
                                        </TableRow>
                                    }).collect_view().into_any();
                                }
                                top.get().into_iter().map(|m| {
                                    let for_open = m.clone();
                                    view! {
                                        <TableRow
                                            class="table__row table__row--clickable"
                                            on:click=move |_| ctx.open_merchant(for_open.clone())
                                        >
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <strong>{m.name.clone()}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{m.country.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_volume_k(m.monthly_volume)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=m.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <RiskBadge risk=m.risk />
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </section>

                <section class="dashboard-card">
                    <h2 class="dashboard-card__title">"Risk Distribution"</h2>
                    <Distribution
                        rows=Signal::derive(move || {
                            let total = merchant_count.get();
                            stats.with(|s| {
                                MerchantRisk::ALL
                                    .iter()
                                    .map(|r| (r.label(), r.badge_variant(), s.risk_count(*r), total))
                                    .collect()
                            })
                        })
                        ready=ready
                    />
                </section>

                <section class="dashboard-card">
                    <h2 class="dashboard-card__title">"Status Distribution"</h2>
                    <Distribution
                        rows=Signal::derive(move || {
                            let total = merchant_count.get();
                            stats.with(|s| {
                                MerchantStatus::ALL
                                    .iter()
                                    .map(|st| (st.label(), st.badge_variant(), s.status_count(*st), total))
                                    .collect()
                            })
                        })
                        ready=ready
                    />
                </section>
            </div>
        </div>
    }
}

/// Rows are `(label, variant, count, total)`
#[component]
fn Distribution(
    #[prop(into)] rows: Signal<Vec<(&'static str, &'static str, usize, usize)>>,
    #[prop(into)] ready: Signal<bool>,
) -> impl IntoView {
    view! {
        <ul class="distribution">
            {move || {
                let ready = ready.get();
                rows.get().into_iter().map(|(label, variant, count, total)| {
                    let width = format!("width: {:.0}%;", share(count, total));
                    view! {
                        <li class="distribution__row">
                            <span class="distribution__label">{label}</span>
                            <div class="distribution__track">
                                <div
                                    class=format!("distribution__bar distribution__bar--{}", variant)
                                    style=width
                                ></div>
                            </div>
                            <span class="distribution__count">
                                {if ready { count.to_string() } else { "-".to_string() }}
                            </span>
                        </li>
                    }
                }).collect_view()
            }}
        </ul>
    }
}
