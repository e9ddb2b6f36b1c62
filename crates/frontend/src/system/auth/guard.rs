use leptos::prelude::*;

use super::context::use_auth;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;

/// Component that requires authentication.
/// Without a session the protected page is not rendered and the route is
/// replaced with the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let authenticated = move || auth.with(|s| s.is_authenticated());

    Effect::new(move |_| {
        if !authenticated() && ctx.route.with(|r| r.is_protected()) {
            log::info!("no session, redirecting to login");
            ctx.replace(AppRoute::Login);
        }
    });

    view! {
        <Show when=authenticated fallback=|| ()>
            {children()}
        </Show>
    }
}
