//! Guarded layout wrapping every `/dashboard` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a placeholder while the session restores, nothing once the guard
//! has denied access (the redirect effect is already navigating away), and
//! the dashboard chrome plus the matched child route once access is granted.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_header::DashboardHeader;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, install_unauth_redirect};

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let decision = Memo::new(move |_| auth.with(GuardDecision::evaluate));

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="dashboard-shell dashboard-shell--pending">
                <p class="dashboard-shell__status">"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Denied => ().into_any(),
        GuardDecision::Granted => view! {
            <div class="dashboard-shell">
                <DashboardHeader/>
                <main class="dashboard-shell__main">
                    <Outlet/>
                </main>
            </div>
        }
        .into_any(),
    }
}
