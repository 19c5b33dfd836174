//! Invitation acceptance page for `/invite/accept?token=...`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The invitee sets a password against the invitation token. The preview
//! call only personalizes the greeting; its failure is deliberately silent.
//! On success the page pauses briefly, then routes to `/login` with the
//! invitee's email prefilled.

#[cfg(test)]
#[path = "invite_accept_test.rs"]
mod invite_accept_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::error::{ApiError, NETWORK_MESSAGE};
use crate::net::types::InvitationPreview;
use crate::util::task::spawn;
use crate::util::validation::{INVITE_PASSWORD_MIN_CHARS, password_mismatch, password_too_short};

/// Pause between the success message and the login redirect.
pub const REDIRECT_DELAY_MS: u32 = 1500;

const ACCEPT_SUCCESS: &str = "Invitation accepted. Your password has been set. You may now sign in.";
const ACCEPT_EXPIRED: &str = "This invitation link has expired. Please ask your admin to resend the invitation.";
const ACCEPT_INVALID: &str = "This invitation link is invalid. Please check the link or request a new one.";
const ACCEPT_FALLBACK: &str = "Something went wrong. Please try again.";

/// Invitee-entered form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AcceptForm {
    token: String,
    password: String,
    confirmation: String,
    submitting: bool,
}

impl AcceptForm {
    fn submit_disabled(&self) -> bool {
        self.token.is_empty()
            || self.password.chars().count() < INVITE_PASSWORD_MIN_CHARS
            || self.password != self.confirmation
            || self.submitting
    }

    fn show_too_short(&self) -> bool {
        password_too_short(&self.password, INVITE_PASSWORD_MIN_CHARS)
    }

    fn show_mismatch(&self) -> bool {
        password_mismatch(&self.password, &self.confirmation)
    }
}

/// Greeting data from a successful preview call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Greeting {
    email: String,
    inviter: String,
}

impl Greeting {
    fn from_preview(preview: InvitationPreview) -> Self {
        Self {
            email: preview.email,
            inviter: preview.inviter_name.filter(|n| !n.is_empty()).unwrap_or_else(|| "Admin".to_owned()),
        }
    }
}

fn greeting_line(greeting: Option<&Greeting>) -> String {
    match greeting.map(|g| g.email.as_str()).filter(|e| !e.is_empty()) {
        Some(email) => format!("Hi {email}."),
        None => "Welcome.".to_owned(),
    }
}

fn inviter_label(greeting: Option<&Greeting>) -> String {
    greeting.map_or_else(|| "your admin".to_owned(), |g| g.inviter.clone())
}

/// User-facing copy for a failed accept call.
fn accept_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Gone { .. } => ACCEPT_EXPIRED.to_owned(),
        ApiError::NotFound { .. } => ACCEPT_INVALID.to_owned(),
        ApiError::Network | ApiError::Unavailable => NETWORK_MESSAGE.to_owned(),
        ApiError::Decode(_) => ACCEPT_FALLBACK.to_owned(),
        ApiError::Unauthorized { message, .. } | ApiError::Rejected { message, .. } => message.clone(),
    }
}

/// Post-accept destination, prefilling the email when known.
fn login_redirect_path(email: Option<&str>) -> String {
    match email.filter(|e| !e.is_empty()) {
        Some(email) => format!("/login?email={}", urlencoding::encode(email)),
        None => "/login".to_owned(),
    }
}

#[component]
pub fn InviteAcceptPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let form = RwSignal::new(AcceptForm::default());
    let greeting = RwSignal::new(None::<Greeting>);
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let token = query.with(|q| q.get("token")).unwrap_or_default();
        form.update(|f| f.token.clone_from(&token));
        if token.is_empty() {
            return;
        }
        spawn(async move {
            match crate::net::api::invitation_preview(&token).await {
                Ok(preview) => greeting.set(Some(Greeting::from_preview(preview))),
                Err(e) => log::debug!("invitation preview unavailable: {e}"),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(AcceptForm::submit_disabled) {
            return;
        }
        form.update(|f| f.submitting = true);
        error.set(None);
        message.set(None);
        let (token, password) = form.with_untracked(|f| (f.token.clone(), f.password.clone()));
        let target = login_redirect_path(greeting.with_untracked(|g| g.as_ref().map(|g| g.email.clone())).as_deref());
        let navigate = navigate.clone();
        spawn(async move {
            match crate::net::api::accept_invitation(&token, &password).await {
                Ok(()) => {
                    message.set(Some(ACCEPT_SUCCESS.to_owned()));
                    form.update(|f| f.submitting = false);
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(accept_error_message(&e)));
                    form.update(|f| f.submitting = false);
                }
            }
        });
    };

    view! {
        <div class="invite-page">
            <h1>"Accept your invitation"</h1>
            <p class="invite-page__greeting">{move || greeting.with(|g| greeting_line(g.as_ref()))}</p>
            <p class="invite-page__intro">
                "Thanks for accepting the invitation sent by "
                <strong>{move || greeting.with(|g| inviter_label(g.as_ref()))}</strong>
                ". Please set your password below. When you sign in next, use your email address and the password you set now."
            </p>

            {move || message.get().map(|msg| view! { <div class="invite-page__notice invite-page__notice--ok">{msg}</div> })}
            {move || error.get().map(|msg| view! { <div class="invite-page__notice invite-page__notice--error">{msg}</div> })}

            <form class="auth-form" on:submit=on_submit>
                <label class="auth-label">"New password"</label>
                <input
                    class="auth-input"
                    type="password"
                    minlength="8"
                    required
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.password = value);
                    }
                />
                <Show when=move || form.with(AcceptForm::show_too_short)>
                    <p class="auth-hint auth-hint--error">"Password must be at least 8 characters."</p>
                </Show>
                <label class="auth-label">"Confirm password"</label>
                <input
                    class="auth-input"
                    type="password"
                    minlength="8"
                    required
                    prop:value=move || form.with(|f| f.confirmation.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.confirmation = value);
                    }
                />
                <Show when=move || form.with(AcceptForm::show_mismatch)>
                    <p class="auth-hint auth-hint--error">"Passwords do not match."</p>
                </Show>
                <button class="auth-button" type="submit" disabled=move || form.with(AcceptForm::submit_disabled)>
                    {move || if form.with(|f| f.submitting) { "Submitting…" } else { "Accept invitation" }}
                </button>
            </form>
        </div>
    }
}
