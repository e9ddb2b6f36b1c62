use crate::layout::global_context::AppGlobalContext;
use crate::shared::delay::sleep;
use crate::shared::state::AuthHandle;
use crate::shared::storage::browser_repository;
use contracts::shared::config::AppConfig;
use contracts::system::auth::{AuthStore, LoginRequest};
use leptos::prelude::*;

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let key = ctx.with_config(|c| c.storage.auth_key.clone());
    let store = AuthStore::new(browser_repository(&key));
    log::debug!("auth restored, authenticated={}", store.is_authenticated());

    provide_context(AuthHandle::new(store));

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login.
///
/// Form errors come back immediately; credentials are checked after the
/// configured artificial latency.
pub async fn do_login(
    auth: AuthHandle,
    config: AppConfig,
    request: LoginRequest,
) -> Result<(), String> {
    request.validate().map_err(|e| e.to_string())?;

    sleep(config.latency.login_ms).await;

    let token = request
        .authenticate(&config.auth)
        .map_err(|e| e.to_string())?;
    auth.update(|s| s.login(token));
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(auth: AuthHandle) {
    auth.update(|s| s.logout());
}
