//! Events list at `/events` with inline event creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is refetched after every create; nothing is cached between
//! visits. Session-invalid responses clear the token and hard-redirect.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::net::error::ApiError;
use crate::net::types::EventItem;
use crate::state::session::{Session, use_session};
use crate::util::auth::{LOGIN_PATH, handle_auth_failure, hard_redirect};
use crate::util::task::spawn;
use crate::util::validation::trimmed_name;

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <AuthGate>
            <EventsList/>
        </AuthGate>
    }
}

/// Surface `err` inline unless it ended the session.
fn report_failure(session: &Session, err: &ApiError, error: RwSignal<Option<String>>) {
    if handle_auth_failure(session, err) {
        hard_redirect(LOGIN_PATH);
    } else {
        error.set(Some(err.to_string()));
    }
}

fn refresh_events(
    session: Session,
    events: RwSignal<Vec<EventItem>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    let Some(token) = session.token() else {
        return;
    };
    loading.set(true);
    error.set(None);
    spawn(async move {
        match crate::net::api::list_events(&token).await {
            Ok(rows) => events.set(rows),
            Err(e) => report_failure(&session, &e, error),
        }
        loading.set(false);
    });
}

#[component]
fn EventsList() -> impl IntoView {
    let session = use_session();
    let events = RwSignal::new(Vec::<EventItem>::new());
    let name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let initial = session.clone();
    Effect::new(move || refresh_events(initial.clone(), events, loading, error));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(event_name) = trimmed_name(&name.get_untracked()) else {
            return;
        };
        let Some(token) = session.token() else {
            return;
        };
        busy.set(true);
        error.set(None);
        let session = session.clone();
        spawn(async move {
            match crate::net::api::create_event(&token, &event_name).await {
                Ok(_) => {
                    name.set(String::new());
                    refresh_events(session, events, loading, error);
                }
                Err(e) => report_failure(&session, &e, error),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="events-page">
            <h1>"Events"</h1>
            <form class="events-page__create" on:submit=on_create>
                <input
                    class="events-page__input"
                    placeholder="New event name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button
                    class="events-page__button"
                    type="submit"
                    disabled=move || busy.get() || name.with(|n| trimmed_name(n).is_none())
                >
                    "Create Event"
                </button>
                {move || error.get().map(|msg| view! { <span class="events-page__error">{msg}</span> })}
            </form>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="events-page__status">"Loading…"</p> }
            >
                <Show
                    when=move || events.with(|rows| !rows.is_empty())
                    fallback=|| view! { <p class="events-page__status">"No events yet."</p> }
                >
                    <ul class="events-page__list">
                        <For each=move || events.get() key=|event| event.id let:event>
                            <li class="events-page__item">
                                <span>{event.name.clone()}</span>
                                <div class="events-page__links">
                                    <a href=format!("/events/{}", event.id)>"Forms"</a>
                                    <a href=format!("/builder/{}", event.id)>"Builder"</a>
                                    <a href=format!("/preview/{}", event.id)>"Preview"</a>
                                </div>
                            </li>
                        </For>
                    </ul>
                </Show>
            </Show>
        </main>
    }
}
