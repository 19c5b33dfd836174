//! Form builder route at `/builder/{eventId}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::builder_shell::BuilderShell;

#[component]
pub fn BuilderPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = move || params.with(|p| p.get("eventId").unwrap_or_default());

    move || view! { <BuilderShell event_id=event_id()/> }
}
