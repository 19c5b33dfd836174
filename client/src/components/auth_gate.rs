//! Wrapper that withholds authenticated content until a session is confirmed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` once a token is present; otherwise redirects to `/login`.
///
/// The check runs after mount, so SSR output and the first client frame show
/// the placeholder.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let ready = RwSignal::new(false);

    install_unauth_redirect(session.clone(), use_navigate());
    Effect::new(move || {
        if session.is_signed_in() {
            ready.set(true);
        }
    });

    view! {
        <Show
            when=move || ready.get()
            fallback=|| {
                view! {
                    <main class="auth-gate">
                        <p class="auth-gate__message">"Checking authentication…"</p>
                    </main>
                }
            }
        >
            {children()}
        </Show>
    }
}
