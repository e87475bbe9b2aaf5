//! Navigation bar for the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(AuthState::is_authenticated);

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"docsight"</A>
            <nav class="site-header__nav">
                <a href="/#features">"Features"</a>
                <a href="/#how-to-use">"How To Use"</a>
                <A href="/contact">"Contact"</A>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <A href="/login" attr:class="btn btn--ghost">"Log In"</A>
                        <A href="/signup" attr:class="btn btn--primary">"Sign Up"</A>
                    }
                }
            >
                <A href="/dashboard" attr:class="btn btn--primary">"Dashboard"</A>
            </Show>
        </header>
    }
}
