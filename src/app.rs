//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::session;
use crate::state::{auth::AuthState, drafts::DraftsState, ui::UiState};

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
/// Provides all shared state contexts and sets up client-side routing.
/// The session check runs once on the client; until it resolves,
/// `AuthState::authenticated` stays `None` and route guards hold off.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let drafts = RwSignal::new(DraftsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(drafts);
    provide_context(ui);

    // Effects only run in the browser, so the session check never executes
    // during server rendering and `authenticated` stays `None` there.
    Effect::new(move || {
        if auth.get_untracked().authenticated.is_none() {
            let present = session::shared().token().is_some();
            auth.update(|a| a.authenticated = Some(present));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/econsult.css"/>
        <Title text="MCA eConsultation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
