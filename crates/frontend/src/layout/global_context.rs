use crate::routes::AppRoute;
use contracts::domain::a001_merchant::list_view::MerchantListQuery;
use contracts::domain::a001_merchant::Merchant;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    /// Merchant handed over by the page that navigated to its details
    pub nav_payload: RwSignal<Option<Merchant>>,
    config: StoredValue<AppConfig>,
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn write_history(url: &str, replace: bool) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(url))
    };
    if let Err(e) = result {
        log::warn!("history update failed for {}: {:?}", url, e);
    }
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            route: RwSignal::new(AppRoute::from_path(&current_path())),
            nav_payload: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&AppConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Keeps `route` in sync with browser back/forward. An unknown start
    /// path is rewritten to the page it resolved to.
    pub fn init_router_integration(&self) {
        let this = *self;
        let Some(w) = window() else {
            return;
        };

        if let Some(route) = AppRoute::redirect_for(&current_path()) {
            log::debug!("redirect {} -> {:?}", current_path(), route);
            write_history(&route.path(), true);
        }

        let on_pop = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let route = AppRoute::from_path(&current_path());
            log::debug!("popstate -> {:?}", route);
            this.nav_payload.set(None);
            this.route.set(route);
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            w.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
        {
            log::warn!("failed to subscribe to popstate: {:?}", e);
        }
        // listener lives as long as the page
        on_pop.forget();
    }

    pub fn navigate(&self, route: AppRoute) {
        self.go(route, None, false);
    }

    /// Navigation that does not leave a history entry
    pub fn replace(&self, route: AppRoute) {
        self.go(route, None, true);
    }

    /// Opens merchant details with the already known record attached.
    pub fn open_merchant(&self, merchant: Merchant) {
        let route = AppRoute::MerchantDetails(merchant.id.clone());
        self.go(route, Some(merchant), false);
    }

    fn go(&self, route: AppRoute, payload: Option<Merchant>, replace: bool) {
        if self.route.with_untracked(|current| current == &route) {
            return;
        }
        log::debug!("navigate {:?} -> {:?}", self.route.get_untracked(), route);
        write_history(&route.path(), replace);
        self.nav_payload.set(payload);
        self.route.set(route);
    }

    /// List filters as stored in the query string (`?q=&status=&risk=&sort=&dir=`)
    pub fn list_query_from_url(&self) -> MerchantListQuery {
        let search = current_search();
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return MerchantListQuery::default();
        }
        serde_qs::from_str(query).unwrap_or_else(|e| {
            log::warn!("ignoring malformed list query '{}': {}", query, e);
            MerchantListQuery::default()
        })
    }

    /// Mirrors list filters into the URL without adding history entries.
    pub fn sync_list_query(&self, query: &MerchantListQuery) {
        let path = AppRoute::Merchants.path();
        let url = if *query == MerchantListQuery::default() {
            path
        } else {
            match serde_qs::to_string(query) {
                Ok(qs) => format!("{}?{}", path, qs),
                Err(e) => {
                    log::warn!("failed to encode list query: {}", e);
                    return;
                }
            }
        };

        let current = format!("{}{}", current_path(), current_search());
        if current != url {
            write_history(&url, true);
        }
    }
}
