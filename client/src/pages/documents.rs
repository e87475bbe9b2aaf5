//! Documents page: every uploaded file with delete and summary links.

use leptos::prelude::*;

use crate::components::file_card::FileCard;
use crate::net::api::ApiClient;
use crate::state::documents::DocumentsState;

/// Fetch the file list into `documents`.
pub(crate) fn refresh_documents(api: &ApiClient, documents: RwSignal<DocumentsState>) {
    documents.update(|d| d.loading = true);
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.get_user_files().await;
            if let Err(e) = &result {
                log::warn!("file list failed: {e}");
            }
            documents.update(|d| d.apply_list(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api;
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let documents = expect_context::<RwSignal<DocumentsState>>();

    let api_for_load = api.clone();
    Effect::new(move || refresh_documents(&api_for_load, documents));

    let on_delete = Callback::new(move |file_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_file(&file_id).await {
                    Ok(receipt) if receipt.deleted => {
                        documents.update(|d| {
                            d.remove(&receipt.file_id);
                        });
                    }
                    Ok(_) => log::warn!("delete of {file_id} was not confirmed"),
                    Err(e) => documents.update(|d| d.error = Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, file_id);
        }
    });

    view! {
        <div class="documents-page">
            <h1 class="page-title">"Your Documents"</h1>
            <Show when=move || documents.get().error.is_some()>
                <p class="form-error">{move || documents.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !documents.get().loading
                fallback=move || view! { <p>"Loading documents..."</p> }
            >
                <Show
                    when=move || !documents.get().items.is_empty()
                    fallback=move || view! { <p class="empty-state">"No documents yet. Upload one from the overview."</p> }
                >
                    <div class="file-list">
                        <For
                            each=move || documents.get().items
                            key=|f| f.id.clone()
                            children=move |record| view! { <FileCard record=record on_delete=on_delete/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
