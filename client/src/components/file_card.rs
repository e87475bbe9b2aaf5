//! Card for one uploaded document in dashboard lists.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::FileRecord;
use crate::util::format::{file_size, short_date};

#[component]
pub fn FileCard(record: FileRecord, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = format!("/dashboard/documents/{}", record.id);
    let status_class = format!("file-card__status file-card__status--{}", record.status.label().to_ascii_lowercase());
    let meta = format!("{} · {}", file_size(record.size), short_date(&record.upload_date));
    let id = record.id.clone();

    view! {
        <div class="file-card">
            <A href=href attr:class="file-card__name">{record.name}</A>
            <span class="file-card__meta">{meta}</span>
            <span class=status_class>{record.status.label()}</span>
            {on_delete.map(|on_delete| {
                view! {
                    <button
                        class="file-card__delete"
                        title="Delete document"
                        aria-label="Delete document"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        "✕"
                    </button>
                }
            })}
        </div>
    }
}
