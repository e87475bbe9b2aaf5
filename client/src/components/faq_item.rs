//! Collapsible question/answer row.

use leptos::prelude::*;

#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="faq-item" class:faq-item--open=move || open.get() on:click=move |_| open.update(|o| *o = !*o)>
            <div class="faq-item__head">
                <h3 class="faq-item__question">{question}</h3>
                <span class="faq-item__chevron" aria-hidden="true">"▾"</span>
            </div>
            <Show when=move || open.get()>
                <p class="faq-item__answer">{answer}</p>
            </Show>
        </div>
    }
}
