//! Signup page: name, email, password, plus the Google placeholder flow.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::{SIGNUP_REQUIRED_MESSAGE, SessionStore};
use crate::util::auth::install_authed_redirect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Trim name and email and require all three fields.
pub(crate) fn signup_input(name: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(SIGNUP_REQUIRED_MESSAGE);
    }
    Ok(SignupInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();
    install_authed_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
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
        let input = match signup_input(&name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
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
                if let Err(e) = session.signup(&input.name, &input.email, &input.password).await {
                    error.set(Some(e.to_string()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session_for_submit, input);
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
                <div class="auth-card__brand">
                    <h1>"docsight"</h1>
                    <p>"Unlock insights from your documents with the power of AI."</p>
                </div>
                <div class="auth-card__form">
                    <h2 class="auth-card__title">"Create Your Account"</h2>
                    <button class="btn btn--oauth btn--block" on:click=on_google disabled=move || busy.get()>
                        "Sign up with Google"
                    </button>
                    <div class="auth-card__divider"><span>"OR"</span></div>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Full Name"
                            <input
                                class="field"
                                type="text"
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
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
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <p class="auth-card__switch">
                        "Already have an account? "
                        <A href="/login">"Log in"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}
