//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    builder::BuilderPage, dashboard::DashboardPage, event_forms::EventFormsPage, events::EventsPage,
    invite_accept::InviteAcceptPage, login::LoginPage, onboarding::OnboardingPage, preview::PreviewPage,
    reset_confirm::ResetConfirmPage, reset_request::ResetRequestPage, resend::ResendPage, signup::SignupPage,
    verify::VerifyPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::for_platform());

    view! {
        <Stylesheet id="leptos" href="/pkg/eventleads-ui.css"/>
        <Title text="EventLeads"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify") view=VerifyPage/>
                <Route path=StaticSegment("resend") view=ResendPage/>
                <Route path=(StaticSegment("reset"), StaticSegment("request")) view=ResetRequestPage/>
                <Route path=(StaticSegment("reset"), StaticSegment("confirm")) view=ResetConfirmPage/>
                <Route path=(StaticSegment("invite"), StaticSegment("accept")) view=InviteAcceptPage/>
                <Route path=StaticSegment("onboarding") view=OnboardingPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=(StaticSegment("events"), ParamSegment("eventId")) view=EventFormsPage/>
                <Route path=(StaticSegment("builder"), ParamSegment("eventId")) view=BuilderPage/>
                <Route path=(StaticSegment("preview"), ParamSegment("eventId")) view=PreviewPage/>
            </Routes>
        </Router>
    }
}
