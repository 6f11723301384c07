//! Subscription dashboard for the logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the root only while a logged-in session exists. Verifies the
//! subscription on mount, on "Check Subscription", and after every answered
//! subscribe request. Status is never updated optimistically.

#[cfg(test)]
#[path = "subscription_panel_test.rs"]
mod subscription_panel_test;

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::net::types::SubscriptionStatus;
use crate::state::subscription::SubscriptionState;

fn logged_in_line(email: &str) -> String {
    format!("Logged in as: {email}")
}

/// Status line; blank status until the first verify resolves.
fn status_line(status: Option<SubscriptionStatus>) -> String {
    match status {
        Some(status) => format!("Subscription status: {status}"),
        None => "Subscription status: ".to_owned(),
    }
}

/// Issue a verify tagged with a fresh sequence number.
fn spawn_verify(config: &ApiConfig, email: &str, state: RwSignal<SubscriptionState>) {
    let seq = state.try_update(SubscriptionState::begin_verify).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        let email = email.to_owned();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::verify_subscription(&config, &email).await;
            let applied = state.try_update(|s| s.finish_verify(seq, result)).unwrap_or(false);
            if !applied {
                log::debug!("verify #{seq} not applied");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, seq);
    }
}

#[cfg(feature = "hydrate")]
fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Dashboard showing the account email, its subscription status, and the
/// check / subscribe actions.
#[component]
pub fn SubscriptionPanel(config: ApiConfig, email: String) -> impl IntoView {
    let state = RwSignal::new(SubscriptionState::default());

    // Verify on mount.
    #[cfg(feature = "hydrate")]
    spawn_verify(&config, &email, state);

    let check_config = config.clone();
    let check_email = email.clone();
    let on_check = move |_| spawn_verify(&check_config, &check_email, state);

    let subscribe_config = config;
    let subscribe_email = email.clone();
    let on_subscribe = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = subscribe_config.clone();
            let email = subscribe_email.clone();
            leptos::task::spawn_local(async move {
                let days = crate::state::subscription::SUBSCRIBE_DAYS;
                let result = crate::net::api::subscribe(&config, &email, days).await;
                let follow_up = state.try_update(|s| s.finish_subscribe(result)).unwrap_or_default();
                if let Some(alert) = follow_up.alert.as_deref() {
                    show_alert(alert);
                }
                if follow_up.refresh {
                    spawn_verify(&config, &email, state);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&subscribe_config, &subscribe_email);
        }
    };

    view! {
        <section class="subscription-panel">
            <h2>"Subscription Dashboard"</h2>
            <p class="subscription-panel__email">{logged_in_line(&email)}</p>
            <p class="subscription-panel__status">{move || state.with(|s| status_line(s.status))}</p>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="subscription-panel__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="subscription-panel__notice">{move || state.with(|s| s.notice.clone().unwrap_or_default())}</p>
            </Show>
            <button class="btn subscription-panel__check" on:click=on_check>
                "Check Subscription"
            </button>
            <button class="btn subscription-panel__subscribe" on:click=on_subscribe>
                "Subscribe / Extend 30 days"
            </button>
        </section>
    }
}
