//! Terminal onboarding step showing the created organization.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::onboarding::OnboardingWizard;
use crate::util::analytics::use_analytics;

#[component]
pub fn SuccessStep(wizard: RwSignal<OnboardingWizard>) -> impl IntoView {
    let analytics = StoredValue::new(use_analytics());
    let navigate = use_navigate();
    let on_complete = move |_| {
        let path = analytics.with_value(|a| wizard.with_untracked(|w| w.complete(a.sink())));
        navigate(path, NavigateOptions::default());
    };
    let name = move || wizard.with(|w| w.draft().name.clone());
    let org_id = move || wizard.with(|w| w.created().map(|org| org.id.to_string()).unwrap_or_default());
    let timezone = move || {
        wizard.with(|w| w.created().map_or_else(|| w.draft().timezone.clone(), |org| org.timezone.clone()))
    };
    let created_at = move || wizard.with(|w| w.created().and_then(|org| org.created_at.clone()).unwrap_or_default());

    view! {
        <div class="wizard-step wizard-step--success">
            <div class="wizard-success__hero">
                <h3>"Welcome to " {name} "!"</h3>
                <p>
                    "Your organization has been created successfully. You're now an Admin and can start building amazing event forms."
                </p>
            </div>

            <div class="wizard-card wizard-card--org">
                <div class="wizard-card__header">
                    <h4>{name}</h4>
                    <span class="wizard-badge">"Active"</span>
                </div>
                <p class="wizard-card__meta">"Organization ID: " {org_id}</p>
                <div class="wizard-card__limits">
                    <div><span>"Max Users"</span><strong>"5"</strong></div>
                    <div><span>"Max Events"</span><strong>"10"</strong></div>
                    <div><span>"Plan"</span><strong>"Basic"</strong></div>
                </div>
                <div class="wizard-card__footer">
                    <span>"Timezone: " {timezone}</span>
                    <span>"Created: " {created_at}</span>
                </div>
            </div>

            <div class="wizard-card wizard-card--next">
                <h4>"What's next?"</h4>
                <ol>
                    <li>"Explore your dashboard and organization settings"</li>
                    <li>"Invite team members to collaborate"</li>
                    <li>"Create your first event and form"</li>
                </ol>
            </div>

            <div class="wizard-success__actions">
                <button class="wizard-button wizard-button--primary" on:click=on_complete>
                    "Go to Dashboard"
                </button>
            </div>
        </div>
    }
}
