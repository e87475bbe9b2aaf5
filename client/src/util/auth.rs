//! Route guard for the protected dashboard subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same decision: wait while the session is
//! restoring, redirect to `/login` when nobody is signed in, otherwise render.
//! The decision is a pure function of `AuthState`; the redirect is issued by an
//! effect on state change, never from inside a render pass.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// What the guard does for the current `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still running; show a placeholder.
    Pending,
    /// Nobody is signed in; send the viewer to log in.
    Denied,
    /// Render the protected subtree.
    Granted,
}

impl GuardDecision {
    pub fn evaluate(state: &AuthState) -> Self {
        if state.loading {
            Self::Pending
        } else if state.is_authenticated() {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

/// Result of re-evaluating the guard after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardStep {
    pub decision: GuardDecision,
    /// Where to navigate, if this step entered `Denied`.
    pub redirect: Option<&'static str>,
}

/// Advance the guard from `previous` for `state`.
///
/// A redirect is produced only on entering `Denied`, so repeated
/// notifications while already denied do not navigate again.
pub fn transition(previous: Option<GuardDecision>, state: &AuthState) -> GuardStep {
    let decision = GuardDecision::evaluate(state);
    let entered_denied = decision == GuardDecision::Denied && previous != Some(GuardDecision::Denied);
    GuardStep { decision, redirect: entered_denied.then_some(LOGIN_ROUTE) }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<GuardDecision>| {
        let step = auth.with(|state| transition(previous, state));
        if let Some(target) = step.redirect {
            log::info!("route guard: no session, redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        step.decision
    });
}

/// Send an already signed-in viewer from an auth page to the dashboard.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if GuardDecision::evaluate(&auth.get()) == GuardDecision::Granted {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });
}
