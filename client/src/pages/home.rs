//! Marketing landing page: hero, features, how-to-use, and FAQ.
//!
//! SYSTEM CONTEXT
//! ==============
//! Header links point at `/#features` and `/#how-to-use`. Arriving with one
//! of those hashes scrolls the matching section into view after render.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::faq_item::FaqItem;
use crate::components::site_header::SiteHeader;

pub(crate) struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub(crate) const SECTION_IDS: [&str; 2] = ["features", "how-to-use"];

pub(crate) const FEATURES: [Feature; 2] = [
    Feature {
        title: "Generate Summaries",
        description: "docsight summarizes long documents in seconds, saving you hours per week.",
    },
    Feature {
        title: "Get Highlighted Citations",
        description: "docsight gives you a clickable page number and highlight reference with every answer.",
    },
];

pub(crate) const STEPS: [&str; 3] = [
    "Upload a PDF from your dashboard.",
    "Wait a moment while the analysis runs.",
    "Read the summary or ask questions about the document.",
];

pub(crate) const FAQS: [Faq; 4] = [
    Faq {
        question: "What file types are supported?",
        answer: "Uploads currently accept PDF files up to 10 MB. Support for more document types is on the way.",
    },
    Faq {
        question: "How secure is my data?",
        answer: "Uploaded documents are encrypted and processed in a secure, isolated environment.",
    },
    Faq {
        question: "Can I use this for legal documents?",
        answer: "The analysis is not a substitute for professional legal advice. Consult a qualified attorney for legal matters.",
    },
    Faq {
        question: "What languages do you support?",
        answer: "Documents in many languages can be analyzed. See the documentation for the full list.",
    },
];

/// Section id named by a location hash such as `#features`.
///
/// Only known section ids are returned, so arbitrary fragments never drive
/// a scroll.
pub(crate) fn anchor_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    SECTION_IDS.into_iter().find(|known| *known == id)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let hash = location.hash.get();
        let Some(id) = anchor_target(&hash) else {
            return;
        };
        scroll_to_section(id);
    });

    view! {
        <div class="site">
            <SiteHeader/>
            <main>
                <section class="hero">
                    <h1 class="hero__title">"The AI Assistant" <br/> "For Your Documents"</h1>
                    <p class="hero__lead">
                        "Use AI to summarize and query your files in seconds. "
                        "Get a citation with every response."
                    </p>
                    <div class="hero__formats">
                        <span class="format-chip format-chip--pdf">"PDF"</span>
                        <span class="format-chip">"+ more soon"</span>
                    </div>
                    <A href="/signup" attr:class="btn btn--primary btn--large">"Try for Free"</A>
                </section>

                <section id="features" class="section section--tinted">
                    <h2 class="section__title">"Features"</h2>
                    <div class="feature-grid">
                        {FEATURES
                            .iter()
                            .map(|f| {
                                view! {
                                    <article class="feature-card">
                                        <h3>{f.title}</h3>
                                        <p>{f.description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="how-to-use" class="section">
                    <h2 class="section__title">"How To Use"</h2>
                    <ol class="steps">
                        {STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                    </ol>
                </section>

                <section class="section section--tinted">
                    <h2 class="section__title">"Frequently Asked Questions"</h2>
                    <div class="faq-list">
                        {FAQS
                            .iter()
                            .map(|faq| view! { <FaqItem question=faq.question answer=faq.answer/> })
                            .collect_view()}
                    </div>
                </section>
            </main>
        </div>
    }
}

fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
