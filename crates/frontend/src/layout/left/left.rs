use crate::shared::state::use_ui;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ui = use_ui();
    let is_open = move || ui.with(|s| s.is_sidebar_open());

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
