//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores the returned bearer token in the session and routes to `/`.
//! `?email=` prefills the address (used after accepting an invitation).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::use_session;
use crate::util::task::spawn;

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address");
    }
    if password.trim().is_empty() {
        return Err("Please enter your password");
    }
    Ok(email.to_owned())
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    Effect::new(move || {
        if let Some(prefill) = query.with(|q| q.get("email")).filter(|e| !e.is_empty()) {
            email.set(prefill);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        message.set(None);
        let password_value = password.get_untracked();
        let email_value = match validate_login_input(&email.get_untracked(), &password_value) {
            Ok(email_value) => email_value,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        loading.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    session.set_token(&resp.access_token);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => message.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>

                {move || message.get().map(|msg| view! { <div class="auth-message auth-message--error">{msg}</div> })}

                <form class="auth-form" on:submit=on_submit>
                    <label for="email" class="auth-label">"Email Address"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="Enter your email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                    <label for="password" class="auth-label">"Password"</label>
                    <div class="auth-password">
                        <input
                            id="password"
                            class="auth-input"
                            type=move || password_input_type(show_password.get())
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                        <button
                            type="button"
                            class="auth-password__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                            disabled=move || loading.get()
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="auth-links">
                    <a href="/signup">"Create account"</a>
                    " · "
                    <a href="/reset/request">"Forgot password?"</a>
                </div>
            </div>
        </div>
    }
}
