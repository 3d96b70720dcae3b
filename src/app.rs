//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the process-wide auth session as a Leptos context so route
//! guards and user-aware components share one snapshot, established once
//! at startup.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    account::AccountPage, auth::AuthPage, home::HomePage, world_wizard::WorldWizardPage,
    worlds::WorldsPage,
};
use crate::state::auth::AuthState;

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
/// Provides the auth session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Establish the session once at startup: authenticate against the
    // current cookie, falling back to a refresh when the access token
    // has expired.
    #[cfg(feature = "hydrate")]
    {
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::authenticate().await {
                Ok(user) => Some(user),
                Err(_) => crate::net::api::refresh().await.ok(),
            };
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/worldsmith.css"/>
        <Title text="Worldsmith"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=AuthPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("account") view=AccountPage/>
                <Route path=StaticSegment("worlds") view=WorldsPage/>
                <Route path=(StaticSegment("worlds"), ParamSegment("id")) view=WorldWizardPage/>
            </Routes>
        </Router>
    }
}
