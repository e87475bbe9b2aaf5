//! Dashboard overview: upload, analysis status, and recent files.
//!
//! SYSTEM CONTEXT
//! ==============
//! The index route under the guarded `/dashboard` layout. Uploads land in the
//! shared `DocumentsState` so the documents page sees them without a reload.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::documents::refresh_documents;
use crate::components::file_card::FileCard;
use crate::components::upload_panel::UploadPanel;
use crate::net::api::ApiClient;
use crate::net::types::{AnalysisProgress, FileRecord};
use crate::state::auth::AuthState;
use crate::state::documents::DocumentsState;

/// One-line status such as `Analyzing · 45%`.
pub(crate) fn progress_label(progress: &AnalysisProgress) -> String {
    format!("{} · {}%", progress.status.label(), progress.progress.min(100))
}

/// Greeting line for the signed-in viewer.
pub(crate) fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

/// File id to check next, or `None` while a check is running or once the
/// last upload's analysis has finished.
pub(crate) fn status_check_target(
    last: Option<&FileRecord>,
    progress: Option<&AnalysisProgress>,
    checking: bool,
) -> Option<String> {
    let file = last?;
    if checking {
        return None;
    }
    let finished = progress.is_some_and(|p| p.file_id == file.id && p.status.is_terminal());
    (!finished).then(|| file.id.clone())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();
    let documents = expect_context::<RwSignal<DocumentsState>>();

    let last_upload = RwSignal::new(None::<FileRecord>);
    let progress = RwSignal::new(None::<AnalysisProgress>);
    let checking = RwSignal::new(false);
    let status_error = RwSignal::new(None::<String>);

    let api_for_load = api.clone();
    Effect::new(move || refresh_documents(&api_for_load, documents));

    let on_uploaded = Callback::new(move |record: FileRecord| {
        documents.update(|d| d.insert_uploaded(record.clone()));
        progress.set(None);
        status_error.set(None);
        last_upload.set(Some(record));
    });

    let check_target = move || {
        last_upload.with(|last| progress.with(|p| status_check_target(last.as_ref(), p.as_ref(), checking.get())))
    };

    let on_check_status = move |_| {
        let Some(file_id) = last_upload.with_untracked(|last| {
            progress.with_untracked(|p| status_check_target(last.as_ref(), p.as_ref(), checking.get_untracked()))
        }) else {
            return;
        };
        checking.set(true);
        status_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.get_analysis_status(&file_id).await {
                    Ok(p) => progress.set(Some(p)),
                    Err(e) => status_error.set(Some(e.to_string())),
                }
                checking.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, file_id);
        }
    };

    view! {
        <div class="overview-page">
            <h1 class="page-title">{move || greeting(auth.get().display_name())}</h1>
            <UploadPanel on_uploaded=on_uploaded/>

            <Show when=move || last_upload.get().is_some()>
                <section class="analysis-status">
                    <span class="analysis-status__file">
                        {move || last_upload.get().map(|f| f.name).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=on_check_status.clone() disabled=move || check_target().is_none()>
                        {move || if checking.get() { "Checking..." } else { "Check analysis status" }}
                    </button>
                    <Show when=move || progress.get().is_some()>
                        <div class="progress">
                            <div
                                class="progress__bar"
                                style:width=move || format!("{}%", progress.get().map_or(0, |p| p.progress.min(100)))
                            ></div>
                        </div>
                        <span class="analysis-status__label">
                            {move || progress.get().as_ref().map(progress_label).unwrap_or_default()}
                        </span>
                    </Show>
                    <Show when=move || status_error.get().is_some()>
                        <p class="form-error">{move || status_error.get().unwrap_or_default()}</p>
                    </Show>
                </section>
            </Show>

            <section class="recent-files">
                <div class="recent-files__head">
                    <h2>"Recent documents"</h2>
                    <A href="/dashboard/documents">"View all"</A>
                </div>
                <Show
                    when=move || !documents.get().loading
                    fallback=move || view! { <p>"Loading documents..."</p> }
                >
                    <div class="file-list">
                        <For
                            each=move || documents.with(|d| d.recent().to_vec())
                            key=|f| f.id.clone()
                            children=move |record| view! { <FileCard record=record/> }
                        />
                    </div>
                </Show>
            </section>
        </div>
    }
}
