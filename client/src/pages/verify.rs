//! Email verification landing page for `/verify?token=...`.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::task::spawn;

const VERIFY_PENDING: &str = "Verifying...";
const VERIFY_MISSING_TOKEN: &str = "Missing token";
const VERIFY_SUCCESS: &str = "Email verified. You may now login.";

/// Token to submit, or the message to show instead of calling the backend.
fn verify_token(token: Option<String>) -> Result<String, &'static str> {
    token.filter(|t| !t.is_empty()).ok_or(VERIFY_MISSING_TOKEN)
}

#[component]
pub fn VerifyPage() -> impl IntoView {
    let query = use_query_map();
    let message = RwSignal::new(VERIFY_PENDING.to_owned());

    Effect::new(move || {
        let token = match verify_token(query.with(|q| q.get("token"))) {
            Ok(token) => token,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        spawn(async move {
            let text = match crate::net::api::verify(&token).await {
                Ok(()) => VERIFY_SUCCESS.to_owned(),
                Err(e) => e.to_string(),
            };
            message.set(text);
        });
    });

    view! {
        <main class="auth-page">
            <div class="auth-card auth-card--center">
                <h1>"Verify Email"</h1>
                <p>{move || message.get()}</p>
                <a href="/login">"Back to login"</a>
            </div>
        </main>
    }
}
