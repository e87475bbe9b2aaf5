//! Login page: email + password and the Google placeholder flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through the `SessionStore` in context. Navigation to the
//! dashboard is driven by the authed-redirect effect, so a successful login
//! and arriving here already signed in take the same path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::{LOGIN_REQUIRED_MESSAGE, SessionStore};
use crate::util::auth::install_authed_redirect;

/// Trim the email and require both fields. Passwords are taken verbatim.
pub(crate) fn login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LOGIN_REQUIRED_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();
    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let session_for_submit = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session_for_submit.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login(&email_value, &password_value).await {
                    error.set(Some(e.to_string()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session_for_submit, email_value, password_value);
        }
    };

    let on_google = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login_with_google().await {
                    error.set(Some(e.to_string()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__form">
                    <h2 class="auth-card__title">"Welcome Back!"</h2>
                    <p class="auth-card__subtitle">"Log in to continue to your dashboard."</p>
                    <button class="btn btn--oauth btn--block" on:click=on_google disabled=move || busy.get()>
                        "Continue with Google"
                    </button>
                    <div class="auth-card__divider"><span>"OR"</span></div>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Email Address"
                            <input
                                class="field"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="field"
                                type="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Logging in..." } else { "Log In" }}
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <p class="auth-card__switch">
                        "Don't have an account? "
                        <A href="/signup">"Sign up"</A>
                    </p>
                </div>
                <div class="auth-card__brand">
                    <h1>"docsight"</h1>
                    <p>"Unlock insights from your documents with the power of AI."</p>
                </div>
            </div>
        </div>
    }
}
