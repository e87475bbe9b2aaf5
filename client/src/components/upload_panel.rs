//! PDF upload panel for the dashboard overview.
//!
//! DESIGN
//! ======
//! The panel reads the picked file into memory and hands it to the backend,
//! which owns validation (presence, PDF type, 10 MiB cap). Clicking upload
//! with nothing picked is sent through as a missing file so the viewer sees
//! the same message the backend would return.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{FileRecord, MAX_UPLOAD_BYTES, PDF_CONTENT_TYPE};
use crate::util::format::file_size;

#[component]
pub fn UploadPanel(on_uploaded: Callback<FileRecord>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let on_upload = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let picked = input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                let result = match picked {
                    Some(file) => match read_upload(&file).await {
                        Ok(upload) => api.upload_file(Some(upload)).await,
                        Err(e) => Err(e),
                    },
                    None => api.upload_file(None).await,
                };
                match result {
                    Ok(record) => {
                        notice.set(Some(format!("Uploaded {}", record.name)));
                        on_uploaded.run(record);
                    }
                    Err(e) => {
                        log::warn!("upload failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, input_ref, on_uploaded);
        }
    };

    view! {
        <section class="upload-panel">
            <h2 class="upload-panel__title">"Upload a document"</h2>
            <p class="upload-panel__hint">
                {format!("PDF only, up to {}.", file_size(MAX_UPLOAD_BYTES))}
            </p>
            <input class="upload-panel__input" type="file" accept=PDF_CONTENT_TYPE node_ref=input_ref/>
            <button class="btn btn--primary" on:click=on_upload disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Upload" }}
            </button>
            <Show when=move || error.get().is_some()>
                <p class="upload-panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="upload-panel__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}

#[cfg(feature = "hydrate")]
async fn read_upload(file: &web_sys::File) -> Result<crate::net::types::UploadFile, crate::net::types::ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| crate::net::types::ApiError::Network(format!("could not read {}: {e:?}", file.name())))?;
    Ok(crate::net::types::UploadFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
