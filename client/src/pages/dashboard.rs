//! Dashboard page showing the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads `/auth/me` once per
//! mount; any failure ends the session and returns to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserProfile;
use crate::state::session::use_session;
use crate::util::auth::{LOGIN_PATH, hard_redirect};
use crate::util::task::spawn;

const NOT_AVAILABLE: &str = "N/A";

/// Label/value pairs for the profile grid; absent values render as `N/A`.
fn profile_fields(profile: Option<&UserProfile>) -> [(&'static str, String); 3] {
    let user_id = profile.map(|p| p.user_id.to_string());
    let org_id = profile.and_then(|p| p.org_id).map(|id| id.to_string());
    let role = profile.map(|p| p.role.clone()).filter(|r| !r.is_empty());
    [
        ("User ID", user_id.unwrap_or_else(|| NOT_AVAILABLE.to_owned())),
        ("Organization ID", org_id.unwrap_or_else(|| NOT_AVAILABLE.to_owned())),
        ("Role", role.unwrap_or_else(|| NOT_AVAILABLE.to_owned())),
    ]
}

/// True when the profile should point the user at the onboarding wizard.
fn needs_onboarding(profile: Option<&UserProfile>) -> bool {
    profile.is_some_and(|p| p.needs_onboarding || p.org_id.is_none())
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let profile = RwSignal::new(None::<UserProfile>);
    let loading = RwSignal::new(true);

    let load_session = session.clone();
    let load_navigate = navigate.clone();
    Effect::new(move || {
        let Some(token) = load_session.token() else {
            load_navigate(LOGIN_PATH, NavigateOptions::default());
            return;
        };
        let session = load_session.clone();
        spawn(async move {
            match crate::net::api::me(&token).await {
                Ok(user) => profile.set(Some(user)),
                Err(e) => {
                    log::warn!("profile load failed: {e}");
                    session.clear();
                    hard_redirect(LOGIN_PATH);
                }
            }
            loading.set(false);
        });
    });

    let on_sign_out = move |_| {
        session.clear();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard__loading">"Loading..."</p> }
            >
                <div class="dashboard-card">
                    <h1>"Dashboard"</h1>
                    <p>"Welcome to the Event Form Builder"</p>
                </div>

                <div class="dashboard-card">
                    <h2>"User Profile"</h2>
                    <div class="dashboard-profile">
                        {move || {
                            profile
                                .with(|p| profile_fields(p.as_ref()))
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="dashboard-profile__item">
                                            <div class="dashboard-profile__label">{label}</div>
                                            <div class="dashboard-profile__value">{value}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="dashboard-card dashboard-card--links">
                    <Show when=move || profile.with(|p| needs_onboarding(p.as_ref()))>
                        <a class="dashboard-link" href="/onboarding">"Set up your organisation"</a>
                    </Show>
                    <a class="dashboard-link" href="/events">"Events"</a>
                </div>
            </Show>

            <div class="dashboard-actions" hidden=move || loading.get()>
                <button class="dashboard-button dashboard-button--danger" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
