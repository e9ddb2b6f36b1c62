use contracts::domain::a001_merchant::list_view::{MerchantListQuery, RiskFilter, StatusFilter};
use contracts::domain::a001_merchant::Merchant;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MerchantListState {
    pub query: RwSignal<MerchantListQuery>,
    /// Bound to the search input; copied into `query`
    pub search: RwSignal<String>,
    /// Dropdown values ("all" or an enum value)
    pub status_value: RwSignal<String>,
    pub risk_value: RwSignal<String>,
    pub show_add: RwSignal<bool>,
    pub pending_remove: RwSignal<Option<Merchant>>,
    pub success_message: RwSignal<Option<String>>,
}

pub fn create_state(initial: MerchantListQuery) -> MerchantListState {
    let state = MerchantListState {
        search: RwSignal::new(initial.search.clone()),
        status_value: RwSignal::new(initial.status.to_string()),
        risk_value: RwSignal::new(initial.risk.to_string()),
        query: RwSignal::new(initial),
        show_add: RwSignal::new(false),
        pending_remove: RwSignal::new(None),
        success_message: RwSignal::new(None),
    };

    // input -> query
    Effect::new(move |_| {
        let search = state.search.get();
        untrack(move || {
            if state.query.with(|q| q.search != search) {
                state.query.update(|q| q.search = search);
            }
        });
    });

    Effect::new(move |_| {
        let raw = state.status_value.get();
        let status = raw.parse::<StatusFilter>().unwrap_or_else(|e| {
            log::warn!("{}", e);
            StatusFilter::All
        });
        untrack(move || {
            if state.query.with(|q| q.status != status) {
                state.query.update(|q| q.status = status);
            }
        });
    });

    Effect::new(move |_| {
        let raw = state.risk_value.get();
        let risk = raw.parse::<RiskFilter>().unwrap_or_else(|e| {
            log::warn!("{}", e);
            RiskFilter::All
        });
        untrack(move || {
            if state.query.with(|q| q.risk != risk) {
                state.query.update(|q| q.risk = risk);
            }
        });
    });

    state
}

impl MerchantListState {
    /// "Clear all filters": search and dropdowns back to "all", sort kept
    pub fn clear_filters(&self) {
        self.query.update(|q| q.reset_filters());
        self.search.set(String::new());
        self.status_value.set(StatusFilter::All.to_string());
        self.risk_value.set(RiskFilter::All.to_string());
    }
}
