//! Request a password reset email.

use leptos::prelude::*;

use crate::util::task::spawn;

const RESET_REQUEST_SUCCESS: &str = "If registered, a reset email has been sent.";

#[component]
pub fn ResetRequestPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        message.set(None);
        let email_value = email.get_untracked();
        spawn(async move {
            let text = match crate::net::api::reset_request(&email_value).await {
                Ok(_) => RESET_REQUEST_SUCCESS.to_owned(),
                Err(e) => e.to_string(),
            };
            message.set(Some(text));
            loading.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                {move || message.get().map(|msg| view! { <div class="auth-message">{msg}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                <div class="auth-links">
                    <a href="/login">"Back to login"</a>
                </div>
            </div>
        </main>
    }
}
