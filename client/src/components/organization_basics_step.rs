//! First onboarding step: organization name and timezone.
//!
//! DESIGN
//! ======
//! Validation here is advisory. Inline messages and the wizard's Next
//! control follow [`basics_ready`]; the backend re-validates on submit.

#[cfg(test)]
#[path = "organization_basics_step_test.rs"]
mod organization_basics_step_test;

use leptos::prelude::*;

use crate::net::types::{DraftPatch, OrganizationDraft};
use crate::state::onboarding::OnboardingWizard;
use crate::util::analytics::{FieldAction, OnboardingAnalytics, report_check, use_analytics};
use crate::util::validation::{validate_org_name, validate_timezone};

/// Selectable IANA zones with display labels.
pub const TIMEZONES: [(&str, &str); 10] = [
    ("UTC", "UTC (Coordinated Universal Time)"),
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
    ("Europe/London", "London (GMT/BST)"),
    ("Europe/Paris", "Paris (CET/CEST)"),
    ("Asia/Tokyo", "Tokyo (JST)"),
    ("Asia/Shanghai", "Shanghai (CST)"),
    ("Australia/Sydney", "Sydney (AEST/AEDT)"),
];

/// Inline messages currently shown under each field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BasicsErrors {
    pub name: Option<&'static str>,
    pub timezone: Option<&'static str>,
}

impl BasicsErrors {
    pub fn check_name(&mut self, value: &str, analytics: &dyn OnboardingAnalytics) {
        self.name = report_check("name", validate_org_name(value), analytics);
    }

    pub fn check_timezone(&mut self, value: &str, analytics: &dyn OnboardingAnalytics) {
        self.timezone = report_check("timezone", validate_timezone(value), analytics);
    }

    /// Mirrors the summary banner: no errors shown and a name entered.
    #[must_use]
    pub fn is_clear(&self, draft: &OrganizationDraft) -> bool {
        self.name.is_none() && self.timezone.is_none() && !draft.name.trim().is_empty()
    }
}

/// True when the draft passes every rule this step owns.
#[must_use]
pub fn basics_ready(draft: &OrganizationDraft) -> bool {
    validate_org_name(&draft.name).is_ok() && validate_timezone(&draft.timezone).is_ok()
}

#[component]
pub fn OrganizationBasicsStep(wizard: RwSignal<OnboardingWizard>) -> impl IntoView {
    let analytics = StoredValue::new(use_analytics());
    let errors = RwSignal::new(BasicsErrors::default());
    let busy = move || wizard.with(OnboardingWizard::busy);

    let on_name = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wizard.update(|w| w.update_draft(DraftPatch::Name(value.clone())));
        analytics.with_value(|a| errors.update(|e| e.check_name(&value, a.sink())));
    };
    let on_timezone = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wizard.update(|w| w.update_draft(DraftPatch::Timezone(value.clone())));
        analytics.with_value(|a| errors.update(|e| e.check_timezone(&value, a.sink())));
    };
    let track = move |field: &'static str, action: FieldAction| {
        analytics.with_value(|a| a.sink().field_interaction(field, action));
    };

    view! {
        <div class="wizard-step">
            <div class="wizard-field">
                <label for="name" class="wizard-field__label">"Organization Name *"</label>
                <input
                    id="name"
                    class="wizard-field__input"
                    class:wizard-field__input--error=move || errors.get().name.is_some()
                    type="text"
                    placeholder="Enter your organization name"
                    prop:value=move || wizard.with(|w| w.draft().name.clone())
                    on:input=on_name
                    on:focus=move |_| track("name", FieldAction::Focused)
                    on:blur=move |_| track("name", FieldAction::Blurred)
                    disabled=busy
                />
                {move || errors.get().name.map(|msg| view! { <p class="wizard-field__error">{msg}</p> })}
                <p class="wizard-field__hint">"This will be displayed on your forms and dashboard"</p>
            </div>

            <div class="wizard-field">
                <label for="timezone" class="wizard-field__label">"Timezone *"</label>
                <select
                    id="timezone"
                    class="wizard-field__input"
                    class:wizard-field__input--error=move || errors.get().timezone.is_some()
                    prop:value=move || wizard.with(|w| w.draft().timezone.clone())
                    on:change=on_timezone
                    on:focus=move |_| track("timezone", FieldAction::Focused)
                    on:blur=move |_| track("timezone", FieldAction::Blurred)
                    disabled=busy
                >
                    {TIMEZONES
                        .into_iter()
                        .map(|(zone, label)| {
                            view! {
                                <option
                                    value=zone
                                    selected=move || wizard.with(|w| w.draft().timezone == zone)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {move || errors.get().timezone.map(|msg| view! { <p class="wizard-field__error">{msg}</p> })}
                <p class="wizard-field__hint">"This will be used for scheduling and time-based features"</p>
            </div>

            <div class="wizard-card wizard-card--info">
                <h4>"What happens next?"</h4>
                <p>
                    "After creating your organization, you'll be automatically assigned as an Admin. "
                    "You can then invite team members and start creating your first event forms."
                </p>
            </div>

            <Show when=move || !wizard.with(|w| errors.get().is_clear(w.draft()))>
                <div class="wizard-banner wizard-banner--warn">
                    <p>"Please fill in all required fields to continue"</p>
                </div>
            </Show>
        </div>
    }
}
