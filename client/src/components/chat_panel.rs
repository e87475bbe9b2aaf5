//! Question/answer chat about one document.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::chat::{ChatRole, ChatState};

#[component]
pub fn ChatPanel(document_id: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let chat = RwSignal::new(ChatState::default());
    let draft = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(question) = chat.try_update(|c| c.ask(&draft.get_untracked())).flatten() else {
            return;
        };
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let document_id = document_id.clone();
            leptos::task::spawn_local(async move {
                let reply = api.chat_with_document(&document_id, &question).await;
                chat.update(|c| c.apply_reply(reply));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &document_id, question);
        }
    };

    view! {
        <section class="chat-panel">
            <h2 class="chat-panel__title">"Ask about this document"</h2>
            <div class="chat-panel__messages">
                <For each=move || chat.get().messages key=|m| m.id.clone() let:message>
                    <p
                        class="chat-panel__message"
                        class:chat-panel__message--user=message.role == ChatRole::User
                        class:chat-panel__message--assistant=message.role == ChatRole::Assistant
                    >
                        {message.content}
                    </p>
                </For>
                <Show when=move || chat.get().pending>
                    <p class="chat-panel__message chat-panel__message--pending">"Thinking..."</p>
                </Show>
            </div>
            <Show when=move || chat.get().error.is_some()>
                <p class="chat-panel__error">{move || chat.get().error.unwrap_or_default()}</p>
            </Show>
            <form class="chat-panel__form" on:submit=on_send>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || chat.get().pending>
                    "Send"
                </button>
            </form>
        </section>
    }
}
