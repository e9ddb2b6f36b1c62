pub mod state;

use self::state::{create_state, MerchantListState};
use crate::domain::a001_merchant::ui::form::MerchantFormView;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::{RiskBadge, StatusBadge};
use crate::shared::delay::scoped_timeout;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_class, get_sort_indicator};
use crate::shared::modal::Modal;
use crate::shared::state::use_merchants;
use contracts::domain::a001_merchant::list_view::{SortField, ALL};
use contracts::domain::a001_merchant::{Merchant, MerchantRisk, MerchantStatus};
use contracts::shared::format::{format_percent, format_volume};
use leptos::prelude::*;
use thaw::*;

const SKELETON_ROWS: usize = 5;

/// Колонки таблицы: заголовок и поле сортировки
const COLUMNS: [(&str, SortField); 6] = [
    ("Name", SortField::Name),
    ("Country", SortField::Country),
    ("Monthly Volume", SortField::MonthlyVolume),
    ("Chargeback %", SortField::ChargebackRatio),
    ("Status", SortField::Status),
    ("Risk", SortField::Risk),
];

#[component]
#[allow(non_snake_case)]
pub fn MerchantList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_merchants();
    let state = create_state(ctx.list_query_from_url());

    // имитация загрузки: skeleton, затем bootstrap стора
    let load_ms = ctx.with_config(|c| c.latency.list_load_ms);
    store.update(|s| s.set_loading(true));
    scoped_timeout(load_ms, move || {
        store.update(|s| s.initialize());
    });

    // фильтры и сортировка живут в query string, пока открыт сам список
    Effect::new(move |_| {
        let query = state.query.get();
        if ctx.route.with(|r| *r == AppRoute::Merchants) {
            ctx.sync_list_query(&query);
        }
    });

    let rows = Memo::new(move |_| {
        store.with(|s| state.query.with(|q| q.apply(s.merchants())))
    });
    let total = move || store.with(|s| s.len());
    let is_loading = move || store.with(|s| s.is_loading());

    let handle_add = Callback::new(move |merchant: Merchant| {
        let name = merchant.name.clone();
        store.update(|s| s.add(merchant));
        state.show_add.set(false);
        state
            .success_message
            .set(Some(format!("{} was added successfully.", name)));
    });

    let confirm_remove = move |_| {
        let Some(merchant) = state.pending_remove.get_untracked() else {
            return;
        };
        let removed = store.update(|s| s.remove(&merchant.id)).flatten();
        state.pending_remove.set(None);
        if let Some(removed) = removed {
            state
                .success_message
                .set(Some(format!("{} was removed.", removed.name)));
        }
    };

    view! {
        <div class="page merchants-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Merchants"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.show_add.set(true)
                    >
                        {icon("plus")}
                        " Add Merchant"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterBar state=state />

                <div class="list-summary">
                    {move || format!("Showing {} of {} merchants", rows.with(|r| r.len()), total())}
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                {COLUMNS.into_iter().map(|(title, field)| {
                                    view! {
                                        <TableHeaderCell>
                                            <div
                                                class="table__sortable-header"
                                                style="cursor: pointer;"
                                                on:click=create_sort_toggle(field, state.query)
                                            >
                                                {title}
                                                <span class=move || state.query.with(|q| get_sort_class(q.sort_field, field))>
                                                    {move || state.query.with(|q| get_sort_indicator(q.sort_field, field, q.sort_dir.is_ascending()))}
                                                </span>
                                            </div>
                                        </TableHeaderCell>
                                    }
                                }).collect_view()}
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if is_loading() {
                                    return (0..SKELETON_ROWS).map(|_| view! { <SkeletonRow /> }).collect_view().into_any();
                                }
                                rows.get()
                                    .into_iter()
                                    .map(|merchant| view! { <MerchantRow merchant=merchant state=state /> })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !is_loading() && rows.with(|r| r.is_empty())>
                    <div class="empty-state">
                        <h3>"No merchants found"</h3>
                        <p>"Try adjusting your search or filters."</p>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.clear_filters()
                        >
                            "Clear all filters"
                        </Button>
                    </div>
                </Show>
            </div>

            <Show when=move || state.show_add.get()>
                <Modal
                    title="Add Merchant".to_string()
                    on_close=Callback::new(move |_| state.show_add.set(false))
                >
                    <MerchantFormView
                        on_submit=handle_add
                        on_cancel=Callback::new(move |_| state.show_add.set(false))
                    />
                </Modal>
            </Show>

            <Show when=move || state.pending_remove.with(|m| m.is_some())>
                <Modal
                    title="Confirm Removal".to_string()
                    on_close=Callback::new(move |_| state.pending_remove.set(None))
                >
                    <p>
                        {move || {
                            let name = state.pending_remove.with(|m| m.as_ref().map(|m| m.name.clone()).unwrap_or_default());
                            format!(
                                "Are you sure you want to remove {}? This action removes it from local storage.",
                                name
                            )
                        }}
                    </p>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.pending_remove.set(None)
                        >
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=confirm_remove>
                            {icon("delete")}
                            " Remove"
                        </Button>
                    </div>
                </Modal>
            </Show>

            <Show when=move || state.success_message.with(|m| m.is_some())>
                <Modal
                    title="Success".to_string()
                    on_close=Callback::new(move |_| state.success_message.set(None))
                >
                    <p>{move || state.success_message.get().unwrap_or_default()}</p>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| state.success_message.set(None)
                        >
                            "OK"
                        </Button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}

#[component]
fn FilterBar(state: MerchantListState) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-bar__search">
                <Input value=state.search placeholder="Search merchants" />
            </div>
            <Select value=state.status_value>
                <option value=ALL>"All statuses"</option>
                {MerchantStatus::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str()>{s.label()}</option>
                }).collect_view()}
            </Select>
            <Select value=state.risk_value>
                <option value=ALL>"All risk levels"</option>
                {MerchantRisk::ALL.into_iter().map(|r| view! {
                    <option value=r.as_str()>{r.label()}</option>
                }).collect_view()}
            </Select>
        </div>
    }
}

#[component]
fn MerchantRow(merchant: Merchant, state: MerchantListState) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let severity_class = merchant.chargeback_severity().css_class();
    let for_open = merchant.clone();
    let for_view = merchant.clone();
    let for_remove = merchant.clone();

    view! {
        <TableRow
            class="table__row table__row--clickable"
            on:click=move |_| ctx.open_merchant(for_open.clone())
        >
            <TableCell>
                <TableCellLayout truncate=true>
                    <strong>{merchant.name.clone()}</strong>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{merchant.country.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_volume(merchant.monthly_volume)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class=severity_class>{format_percent(merchant.chargeback_ratio)}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <StatusBadge status=merchant.status />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <RiskBadge risk=merchant.risk />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <button
                        class="button button--icon"
                        title="View details"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.open_merchant(for_view.clone());
                        }
                    >
                        {icon("eye")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Remove merchant"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            state.pending_remove.set(Some(for_remove.clone()));
                        }
                    >
                        {icon("delete")}
                    </button>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn SkeletonRow() -> impl IntoView {
    view! {
        <TableRow>
            {(0..COLUMNS.len() + 1).map(|_| view! {
                <TableCell>
                    <span class="skeleton skeleton--text"></span>
                </TableCell>
            }).collect_view()}
        </TableRow>
    }
}
