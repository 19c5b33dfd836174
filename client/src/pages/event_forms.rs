//! Forms belonging to one event, at `/events/{eventId}`.

#[cfg(test)]
#[path = "event_forms_test.rs"]
mod event_forms_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::auth_gate::AuthGate;
use crate::net::types::FormItem;
use crate::state::session::{Session, use_session};
use crate::util::auth::{LOGIN_PATH, handle_auth_failure, hard_redirect};
use crate::util::task::spawn;
use crate::util::validation::trimmed_name;

const NO_SLUG: &str = "no-slug";

/// Route parameter as an event id; non-numeric or zero ids load nothing.
fn parse_event_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok()).filter(|id| *id != 0)
}

fn slug_label(form: &FormItem) -> &str {
    form.public_slug.as_deref().filter(|slug| !slug.is_empty()).unwrap_or(NO_SLUG)
}

#[component]
pub fn EventFormsPage() -> impl IntoView {
    view! {
        <AuthGate>
            <EventForms/>
        </AuthGate>
    }
}

#[derive(Clone, Copy)]
struct FormsView {
    forms: RwSignal<Vec<FormItem>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl FormsView {
    fn fail(self, session: &Session, err: &crate::net::error::ApiError) {
        if handle_auth_failure(session, err) {
            hard_redirect(LOGIN_PATH);
        } else {
            self.error.set(Some(err.to_string()));
        }
    }

    fn refresh(self, session: Session, event_id: Option<i64>) {
        let (Some(event_id), Some(token)) = (event_id, session.token()) else {
            return;
        };
        self.error.set(None);
        self.loading.set(true);
        spawn(async move {
            match crate::net::api::list_forms(&token, event_id).await {
                Ok(rows) => self.forms.set(rows),
                Err(e) => self.fail(&session, &e),
            }
            self.loading.set(false);
        });
    }
}

#[component]
fn EventForms() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let event_id = Memo::new(move |_| params.with(|p| parse_event_id(p.get("eventId").as_deref())));

    let state = FormsView {
        forms: RwSignal::new(Vec::new()),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
    };
    let name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_route = session.clone();
    Effect::new(move || state.refresh(on_route.clone(), event_id.get()));

    let on_refresh = {
        let session = session.clone();
        move |_| state.refresh(session.clone(), event_id.get_untracked())
    };

    let on_create = move |_| {
        let Some(form_name) = trimmed_name(&name.get_untracked()) else {
            return;
        };
        let (Some(id), Some(token)) = (event_id.get_untracked(), session.token()) else {
            return;
        };
        busy.set(true);
        state.error.set(None);
        let session = session.clone();
        spawn(async move {
            match crate::net::api::create_form(&token, id, &form_name).await {
                Ok(_) => {
                    name.set(String::new());
                    state.refresh(session, Some(id));
                }
                Err(e) => state.fail(&session, &e),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="forms-page">
            <h1>
                "Forms for Event #"
                {move || event_id.get().map(|id| id.to_string()).unwrap_or_default()}
            </h1>
            <div class="forms-page__toolbar">
                <input
                    class="forms-page__input"
                    placeholder="New form name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button
                    class="forms-page__button forms-page__button--primary"
                    on:click=on_create
                    disabled=move || busy.get() || name.with(|n| trimmed_name(n).is_none())
                >
                    "Create Form"
                </button>
                <button class="forms-page__button" on:click=on_refresh disabled=move || state.loading.get()>
                    "Refresh"
                </button>
                {move || state.error.get().map(|msg| view! { <span class="forms-page__error">{msg}</span> })}
            </div>
            <Show
                when=move || !state.loading.get()
                fallback=|| view! { <p class="forms-page__status">"Loading…"</p> }
            >
                <Show
                    when=move || state.forms.with(|rows| !rows.is_empty())
                    fallback=|| view! { <p class="forms-page__status">"No forms yet. Create your first form."</p> }
                >
                    <ul class="forms-page__list">
                        <For each=move || state.forms.get() key=|form| form.id let:form>
                            <li class="forms-page__item">
                                <span>{form.name.clone()}</span>
                                <span class="forms-page__slug">{slug_label(&form).to_owned()}</span>
                            </li>
                        </For>
                    </ul>
                </Show>
            </Show>
        </main>
    }
}
