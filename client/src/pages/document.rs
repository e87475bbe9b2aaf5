//! Per-document view: analysis results, summary, and chat.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::chat_panel::ChatPanel;
use crate::net::api::ApiClient;
use crate::net::types::{AnalysisResults, DocumentSummary, Sentiment};
use crate::util::format::{percent, short_date};

fn sentiment_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positive",
        Sentiment::Neutral => "Neutral",
        Sentiment::Negative => "Negative",
    }
}

#[component]
pub fn DocumentPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let file_id = Memo::new(move |_| params.with(|p| p.get("file_id").unwrap_or_default()));

    let results = RwSignal::new(None::<AnalysisResults>);
    let summary = RwSignal::new(None::<DocumentSummary>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = file_id.get();
        results.set(None);
        summary.set(None);
        error.set(None);
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.get_analysis_results(&id).await {
                    Ok(r) => results.set(Some(r)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                match api.get_summary(&id).await {
                    Ok(s) => summary.set(Some(s)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    view! {
        <div class="document-page">
            <A href="/dashboard/documents" attr:class="document-page__back">"← All documents"</A>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <section class="document-summary">
                {move || match summary.get() {
                    Some(s) => view! {
                        <h1 class="page-title">{s.title}</h1>
                        <p class="document-summary__meta">
                            {format!("{} words · {}", s.word_count, short_date(&s.created_at))}
                        </p>
                        <p class="document-summary__content">{s.content}</p>
                    }
                    .into_any(),
                    None => view! { <p>"Loading summary..."</p> }.into_any(),
                }}
            </section>

            <section class="analysis-results">
                <h2>"Analysis"</h2>
                {move || match results.get() {
                    Some(r) => view! {
                        <p class="analysis-results__summary">{r.summary}</p>
                        <p class="analysis-results__sentiment">
                            {format!("Sentiment: {} ({} confidence)", sentiment_label(r.sentiment), percent(r.confidence))}
                        </p>
                        <h3>"Key points"</h3>
                        <ul class="analysis-results__points">
                            {r.key_points.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
                        </ul>
                        <h3>"Entities"</h3>
                        <ul class="analysis-results__entities">
                            {r
                                .entities
                                .into_iter()
                                .map(|e| {
                                    view! {
                                        <li>
                                            <span class="entity__name">{e.name}</span>
                                            <span class="entity__kind">{e.kind}</span>
                                            <span class="entity__confidence">{percent(e.confidence)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    None => view! { <p>"Loading analysis..."</p> }.into_any(),
                }}
            </section>

            {move || view! { <ChatPanel document_id=file_id.get()/> }}
        </div>
    }
}
