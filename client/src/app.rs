//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `SessionStore` for this tab, mirrors its state into an
//! `RwSignal<AuthState>` for reactive readers, and restores the saved session
//! from a client-only effect so the server render always starts in the
//! loading state the browser hydrates from.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    contact::ContactPage, dashboard::DashboardPage, document::DocumentPage, documents::DocumentsPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::documents::DocumentsState;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, KeyValueStore};

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
/// Provides the session store, backend handle, and shared state contexts,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let api = ApiClient::from_config(&config, Arc::clone(&storage));
    let session = SessionStore::new(storage, api.backend());

    let auth = RwSignal::new(session.snapshot());
    session.subscribe(move |state| auth.set(state.clone()));

    let documents = RwSignal::new(DocumentsState::default());

    provide_context(auth);
    provide_context(documents);
    provide_context(session.clone());
    provide_context(api);

    // Effects only run in the browser, so the server never restores.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/docsight.css"/>
        <Title text="docsight"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("documents") view=DocumentsPage/>
                    <Route path=(StaticSegment("documents"), ParamSegment("file_id")) view=DocumentPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
