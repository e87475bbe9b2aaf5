//! Contact form. Messages are checked locally and acknowledged in place.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

pub(crate) const CONTACT_FIELDS_REQUIRED: &str = "Please fill in your name, email, and message.";
pub(crate) const CONTACT_EMAIL_INVALID: &str = "Please enter a valid email address.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trim and check the form fields.
pub(crate) fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactMessage, &'static str> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(CONTACT_FIELDS_REQUIRED);
    }
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if !well_formed {
        return Err(CONTACT_EMAIL_INVALID);
    }
    Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact(&name.get(), &email.get(), &message.get()) {
            Ok(contact) => {
                log::info!("contact message queued ({} chars)", contact.message.len());
                error.set(None);
                sent.set(true);
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(reason) => {
                sent.set(false);
                error.set(Some(reason));
            }
        }
    };

    view! {
        <div class="site">
            <SiteHeader/>
            <main class="contact">
                <p class="contact__eyebrow">"QUESTIONS?"</p>
                <h1 class="contact__title">"Contact Us"</h1>
                <div class="contact__grid">
                    <form class="contact__form" on:submit=on_submit>
                        <input
                            class="field"
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="field"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <textarea
                            class="field"
                            rows="8"
                            placeholder="Message"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary btn--block" type="submit">"Send Message"</button>
                        <Show when=move || error.get().is_some()>
                            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <Show when=move || sent.get()>
                            <p class="form-notice">"Thanks! We'll get back to you soon."</p>
                        </Show>
                    </form>
                    <aside class="contact__aside">
                        <h2>"Get in touch"</h2>
                        <p>
                            "We're always here to help. Contact us if you have any questions, "
                            "suggestions, or concerns."
                        </p>
                    </aside>
                </div>
            </main>
        </div>
    }
}
