//! Top bar for signed-in pages: section links, identity, and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::identity::initials;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();

    let name = move || auth.with(|a| a.display_name().unwrap_or_default().to_owned());
    let avatar = move || auth.with(|a| a.user.as_ref().map(|u| u.avatar.clone()).unwrap_or_default());

    // The guard notices the cleared session and redirects to /login.
    let on_logout = move |_| session.logout();

    view! {
        <header class="dashboard-header">
            <A href="/dashboard" attr:class="dashboard-header__brand">"docsight"</A>
            <nav class="dashboard-header__nav">
                <A href="/dashboard" exact=true>"Overview"</A>
                <A href="/dashboard/documents">"Documents"</A>
                <A href="/dashboard/profile">"Profile"</A>
            </nav>
            <span class="dashboard-header__spacer"></span>
            <span class="dashboard-header__user">
                <img class="dashboard-header__avatar" src=avatar alt=move || initials(&name())/>
                <span class="dashboard-header__name">{name}</span>
            </span>
            <button class="btn dashboard-header__logout" on:click=on_logout title="Log out">
                "Log Out"
            </button>
        </header>
    }
}
