//! Register / login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! First view of the portal. Owns session creation: on an accepted login it
//! hands a `Session` to the root, which then swaps in the dashboard.

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::state::auth::{AuthState, Session};

/// Email + password form with Register and Login actions.
#[component]
pub fn AuthPanel(config: ApiConfig, on_login: Callback<Session>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(AuthState::default());

    let register_config = config.clone();
    let on_register = move |_| {
        if !state.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let config = register_config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&config, &email_value, &password_value).await;
                state.update(|s| s.finish_register(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&register_config, email_value, password_value);
        }
    };

    let login_config = config;
    let on_login_click = move |_| {
        if !state.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }
        // Captured now so the session carries the address that was submitted,
        // even if the input changes while the request is in flight.
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let config = login_config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&config, &email_value, &password_value).await;
                let session = state.try_update(|s| s.finish_login(email_value, result)).flatten();
                if let Some(session) = session {
                    on_login.run(session);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&login_config, email_value, password_value, on_login);
        }
    };

    view! {
        <section class="auth-panel">
            <h2>"Register / Login"</h2>
            <div class="auth-panel__field">
                <label for="auth-email">"Email: "</label>
                <br/>
                <input
                    id="auth-email"
                    class="auth-panel__input"
                    type="email"
                    placeholder="Enter email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="auth-panel__field">
                <label for="auth-password">"Password: "</label>
                <br/>
                <input
                    id="auth-password"
                    class="auth-panel__input"
                    type="password"
                    placeholder="Enter password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button class="btn auth-panel__register" on:click=on_register disabled=move || state.with(|s| s.busy)>
                "Register"
            </button>
            <button class="btn auth-panel__login" on:click=on_login_click disabled=move || state.with(|s| s.busy)>
                "Login"
            </button>
            <p class="auth-panel__message">{move || state.with(|s| s.message.clone())}</p>
        </section>
    }
}
