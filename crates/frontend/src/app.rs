use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::viewport_width;
use crate::shared::state::{MerchantsHandle, UiHandle};
use crate::shared::storage::browser_repository;
use crate::system::auth::AuthProvider;
use contracts::domain::a001_merchant::MerchantStore;
use contracts::shared::config::{load_config, AppConfig};
use contracts::system::ui_state::{initial_sidebar_open, UiStore};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(None).unwrap_or_else(|e| {
        log::error!("failed to load config, using embedded defaults: {}", e);
        AppConfig::embedded()
    });

    let merchants = MerchantStore::new(browser_repository(&config.storage.merchants_key));
    let ui = UiStore::new(
        browser_repository(&config.storage.ui_key),
        initial_sidebar_open(config.ui.sidebar_open, viewport_width()),
    );

    let ctx = AppGlobalContext::new(config);
    // back/forward keeps the route signal in sync for the app lifetime
    ctx.init_router_integration();

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(ctx);
    provide_context(MerchantsHandle::new(merchants));
    provide_context(UiHandle::new(ui));

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
