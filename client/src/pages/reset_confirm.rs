//! Set a new password with the token from a reset email.

#[cfg(test)]
#[path = "reset_confirm_test.rs"]
mod reset_confirm_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::task::spawn;
use crate::util::validation::RESET_PASSWORD_MIN_CHARS;

const RESET_CONFIRM_SUCCESS: &str = "Password updated successfully. You may now login.";

/// Checks run in order: token present, confirmation matches, minimum length.
fn validate_reset_input(token: &str, password: &str, confirmation: &str) -> Result<(), &'static str> {
    if token.is_empty() {
        return Err("Token is required");
    }
    if password != confirmation {
        return Err("Passwords do not match");
    }
    if password.chars().count() < RESET_PASSWORD_MIN_CHARS {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

#[component]
pub fn ResetConfirmPage() -> impl IntoView {
    let query = use_query_map();
    let token = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    Effect::new(move || {
        if let Some(from_url) = query.with(|q| q.get("token")).filter(|t| !t.is_empty()) {
            token.set(from_url);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        message.set(None);
        let token_value = token.get_untracked();
        let password_value = password.get_untracked();
        if let Err(msg) = validate_reset_input(&token_value, &password_value, &confirmation.get_untracked()) {
            message.set(Some(msg.to_owned()));
            return;
        }
        loading.set(true);
        spawn(async move {
            let text = match crate::net::api::reset_confirm(&token_value, &password_value).await {
                Ok(_) => RESET_CONFIRM_SUCCESS.to_owned(),
                Err(e) => e.to_string(),
            };
            message.set(Some(text));
            loading.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Set New Password"</h1>
                {move || message.get().map(|msg| view! { <div class="auth-message">{msg}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || token.with(String::is_empty)>
                        <input
                            class="auth-input"
                            placeholder="Reset token (from email)"
                            prop:value=move || token.get()
                            on:input=move |ev| token.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        placeholder="New password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        placeholder="Confirm new password"
                        type="password"
                        required
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
                <div class="auth-links">
                    <a href="/login">"Back to login"</a>
                </div>
            </div>
        </main>
    }
}
