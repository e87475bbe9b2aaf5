//! Profile page: identity, account stats, and name/email updates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads identity from the session and account stats from the backend.
//! Edits go through `SessionStore::update_profile` so the saved session
//! record stays the single copy of the viewer's name and email.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Profile, ProfileUpdate, SessionRecord};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::format::short_date;

pub(crate) const PROFILE_FIELDS_REQUIRED: &str = "Name and email cannot be empty";
pub(crate) const PROFILE_UNCHANGED: &str = "Nothing to update";

/// The fields of `current` that the form changed.
pub(crate) fn profile_changes(current: &SessionRecord, name: &str, email: &str) -> Result<ProfileUpdate, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() {
        return Err(PROFILE_FIELDS_REQUIRED);
    }
    let update = ProfileUpdate {
        name: (name != current.name).then(|| name.to_owned()),
        email: (email != current.email).then(|| email.to_owned()),
        avatar: None,
    };
    if update.is_empty() {
        return Err(PROFILE_UNCHANGED);
    }
    Ok(update)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();

    let current = auth.get_untracked().user;
    let name = RwSignal::new(current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let stats = RwSignal::new(None::<Profile>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.get_profile().await {
                    Ok(profile) => stats.set(Some(profile)),
                    Err(e) => log::warn!("profile fetch failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, stats);
        }
    });

    let session_for_save = session.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = auth.get_untracked().user else {
            return;
        };
        let update = match profile_changes(&current, &name.get(), &email.get()) {
            Ok(update) => update,
            Err(message) => {
                notice.set(None);
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session_for_save.clone();
            leptos::task::spawn_local(async move {
                match session.update_profile(&update).await {
                    Ok(_) => notice.set(Some("Profile updated.".to_owned())),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session_for_save, update);
        }
    };

    let on_logout = move |_| session.logout();

    let avatar = move || auth.with(|a| a.user.as_ref().map(|u| u.avatar.clone()).unwrap_or_default());
    let updated = move || {
        auth.with(|a| a.user.as_ref().and_then(|u| u.updated_at).map(|at| format!("Last updated {}", short_date(&at))))
    };

    view! {
        <div class="profile-page">
            <h1 class="page-title">"Profile"</h1>
            <section class="profile-card">
                <img class="profile-card__avatar" src=avatar alt="Avatar"/>
                <div class="profile-card__identity">
                    <span class="profile-card__name">{move || auth.with(|a| a.display_name().unwrap_or_default().to_owned())}</span>
                    <span class="profile-card__email">
                        {move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                    </span>
                    <span class="profile-card__updated">{updated}</span>
                </div>
            </section>

            <section class="profile-stats">
                {move || {
                    stats
                        .get()
                        .map(|p| {
                            view! {
                                <dl>
                                    <dt>"Member since"</dt>
                                    <dd>{short_date(&p.join_date)}</dd>
                                    <dt>"Files uploaded"</dt>
                                    <dd>{p.total_files}</dd>
                                    <dt>"Analyses run"</dt>
                                    <dd>{p.total_analysis}</dd>
                                </dl>
                            }
                        })
                }}
            </section>

            <form class="profile-form" on:submit=on_save>
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="field"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="field"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="form-notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
            </form>

            <button class="btn btn--ghost" on:click=on_logout>"Log Out"</button>
        </div>
    }
}
