use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::{do_login, use_auth};
use contracts::system::auth::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let demo = ctx.with_config(|c| c.auth.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest::new(email.get_untracked(), password.get_untracked());
        set_error_message.set(None);
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match do_login(auth, config, request).await {
                Ok(()) => {
                    // переключение на MainLayout произойдёт по смене маршрута
                    ctx.navigate(AppRoute::Dashboard);
                }
                Err(e) => {
                    set_error_message.try_set(Some(e));
                }
            }
            set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-logo">{icon("zap")}</div>
                <h1>"Welcome back!"</h1>
                <h2>"Please enter your credentials to sign in!"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder=demo.email.clone()
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="input-with-action">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                placeholder="••••••"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="button button--icon"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo account:"</p>
                    <p>"Email: " <strong>{demo.email.clone()}</strong></p>
                    <p>"Password: " <strong>{demo.password.clone()}</strong></p>
                </div>
            </div>
        </div>
    }
}
