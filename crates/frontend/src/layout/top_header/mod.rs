//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::icons::icon;
use crate::shared::state::use_ui;
use crate::system::auth::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let ui = use_ui();
    let auth = use_auth();

    let toggle_sidebar = move |_| {
        ui.update(|s| s.toggle_sidebar());
    };

    let logout = move |_| {
        do_logout(auth);
        ctx.navigate(AppRoute::Login);
    };

    let is_sidebar_visible = move || ui.with(|s| s.is_sidebar_open());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Merchant Ops Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>"Admin"</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </div>
    }
}
