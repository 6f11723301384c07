//! Root application component and the SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::{auth_panel::AuthPanel, subscription_panel::SubscriptionPanel};
use crate::net::config::ApiConfig;
use crate::state::auth::{Session, dashboard_email};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Holds the in-memory session and shows the auth form until a login
/// succeeds, then the subscription dashboard. There is no way back to the
/// form short of reloading the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let session = RwSignal::new(None::<Session>);
    let on_login = Callback::new(move |s: Session| session.set(Some(s)));

    view! {
        <Title text="Subscription Portal"/>

        <main class="portal">
            <h1>"Welcome to the Subscription Portal"</h1>
            {move || {
                let email = session.with(|s| dashboard_email(s.as_ref()).map(str::to_owned));
                match email {
                    Some(email) => view! { <SubscriptionPanel config=config.clone() email=email/> }.into_any(),
                    None => view! { <AuthPanel config=config.clone() on_login=on_login/> }.into_any(),
                }
            }}
        </main>
    }
}
