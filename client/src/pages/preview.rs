//! Read-only form preview at `/preview/{eventId}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn PreviewPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = move || params.with(|p| p.get("eventId").unwrap_or_default());

    view! {
        <main class="preview-page">
            <h1>"Preview • Event " {event_id}</h1>
            <div class="preview-page__frame">"Rendered layout (read-only)"</div>
        </main>
    }
}
