//! Sidebar navigation

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::icons::icon;
use crate::shared::state::use_ui;
use crate::system::auth::{do_logout, use_auth};
use contracts::system::ui_state::is_narrow_viewport;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: &'static str,
    route: AppRoute,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Dashboard",
            icon: "dashboard",
            route: AppRoute::Dashboard,
        },
        MenuItem {
            label: "Merchants",
            icon: "merchants",
            route: AppRoute::Merchants,
        },
    ]
}

/// Текущая ширина окна браузера
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let ui = use_ui();
    let auth = use_auth();

    view! {
        <nav class="app-sidebar__content">
            {get_menu_items().into_iter().map(|item| {
                let route = StoredValue::new(item.route.clone());
                let is_active = move || {
                    let target = route.get_value();
                    ctx.route.with(|current| match (&target, current) {
                        (AppRoute::Merchants, current) => current.shows_merchant_list(),
                        (target, current) => target == current,
                    })
                };

                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=is_active
                        on:click=move |_| {
                            ctx.navigate(route.get_value());
                            // на узком экране меню закрывается после перехода
                            if viewport_width().is_some_and(is_narrow_viewport) {
                                ui.update(|s| s.set_sidebar_open(false));
                            }
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}

            <div class="app-sidebar__footer">
                <div
                    class="app-sidebar__item"
                    on:click=move |_| {
                        do_logout(auth);
                        ctx.navigate(AppRoute::Login);
                    }
                >
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
