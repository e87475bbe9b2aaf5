use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <A href="/">"Back to home"</A>
        </div>
    }
}
