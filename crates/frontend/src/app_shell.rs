//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (LoginPage на "/" или защищённый MainLayout)
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + страница маршрута)

use crate::dashboards::MerchantOverviewDashboard;
use crate::domain::a001_merchant::ui::details::MerchantDetails;
use crate::domain::a001_merchant::ui::list::MerchantList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::AppRoute;
use crate::system::auth::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Главная область: дашборд или список мерчантов; детали открываются
/// модальным окном поверх списка.
#[component]
fn RouteContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let shows_list = Memo::new(move |_| ctx.route.with(|r| r.shows_merchant_list()));
    let details_id = Memo::new(move |_| match ctx.route.get() {
        AppRoute::MerchantDetails(id) => Some(id),
        _ => None,
    });

    view! {
        <Show
            when=move || shows_list.get()
            fallback=|| view! { <MerchantOverviewDashboard /> }
        >
            <MerchantList />
            {move || details_id.get().map(|id| view! { <MerchantDetails id=id /> })}
        </Show>
    }
}

/// Main application layout с Sidebar и содержимым текущего маршрута.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <RouteContent /> }.into_any()
        />
    }
}

/// Application shell - auth gate component.
///
/// Показывает:
/// - `LoginPage` на маршруте логина "/"
/// - `MainLayout` для остальных маршрутов, только при наличии сессии
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let on_login = Memo::new(move |_| ctx.route.with(|r| *r == AppRoute::Login));

    view! {
        <Show
            when=move || on_login.get()
            fallback=|| view! {
                <RequireAuth>
                    <MainLayout />
                </RequireAuth>
            }
        >
            <LoginPage />
        </Show>
    }
}
