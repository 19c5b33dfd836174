//! Second onboarding step: optional billing contact.
//!
//! Both fields may stay empty. "Skip" wipes them from the draft and hides
//! the inputs; the draft then serializes without billing keys.

#[cfg(test)]
#[path = "billing_info_step_test.rs"]
mod billing_info_step_test;

use leptos::prelude::*;

use crate::net::types::{DraftPatch, OrganizationDraft};
use crate::state::onboarding::OnboardingWizard;
use crate::util::analytics::{OnboardingAnalytics, report_check, use_analytics};
use crate::util::validation::{validate_billing_address, validate_billing_email};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BillingErrors {
    pub email: Option<&'static str>,
    pub address: Option<&'static str>,
}

impl BillingErrors {
    pub fn check_email(&mut self, value: &str, analytics: &dyn OnboardingAnalytics) {
        self.email = report_check("billing_email", validate_billing_email(value), analytics);
    }

    pub fn check_address(&mut self, value: &str, analytics: &dyn OnboardingAnalytics) {
        self.address = report_check("billing_address", validate_billing_address(value), analytics);
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.email.is_some() || self.address.is_some()
    }
}

/// True when whatever billing data is present passes validation.
#[must_use]
pub fn billing_ready(draft: &OrganizationDraft) -> bool {
    validate_billing_email(draft.billing_email.as_deref().unwrap_or_default()).is_ok()
        && validate_billing_address(draft.billing_address.as_deref().unwrap_or_default()).is_ok()
}

/// Toggle the skip option, clearing billing data when it turns on.
pub fn apply_skip(wizard: &mut OnboardingWizard, errors: &mut BillingErrors, skip: bool) {
    if skip {
        wizard.update_draft(DraftPatch::ClearBilling);
        *errors = BillingErrors::default();
    }
}

#[component]
pub fn BillingInfoStep(wizard: RwSignal<OnboardingWizard>) -> impl IntoView {
    let analytics = StoredValue::new(use_analytics());
    let errors = RwSignal::new(BillingErrors::default());
    let skip = RwSignal::new(false);
    let busy = move || wizard.with(OnboardingWizard::busy);

    let on_skip = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        skip.set(checked);
        wizard.update(|w| errors.update(|e| apply_skip(w, e, checked)));
    };
    let on_email = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wizard.update(|w| w.update_draft(DraftPatch::BillingEmail(value.clone())));
        analytics.with_value(|a| errors.update(|e| e.check_email(&value, a.sink())));
    };
    let on_address = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        wizard.update(|w| w.update_draft(DraftPatch::BillingAddress(value.clone())));
        analytics.with_value(|a| errors.update(|e| e.check_address(&value, a.sink())));
    };

    view! {
        <div class="wizard-step">
            <label class="wizard-toggle">
                <input
                    id="skip-billing"
                    type="checkbox"
                    prop:checked=move || skip.get()
                    on:change=on_skip
                    disabled=busy
                />
                "Skip billing setup for now (you can add this later)"
            </label>

            <Show when=move || !skip.get()>
                <div class="wizard-field">
                    <label for="billing_email" class="wizard-field__label">"Billing Email"</label>
                    <input
                        id="billing_email"
                        class="wizard-field__input"
                        class:wizard-field__input--error=move || errors.get().email.is_some()
                        type="email"
                        placeholder="billing@yourcompany.com"
                        prop:value=move || wizard.with(|w| w.draft().billing_email.clone().unwrap_or_default())
                        on:input=on_email
                        disabled=busy
                    />
                    {move || errors.get().email.map(|msg| view! { <p class="wizard-field__error">{msg}</p> })}
                    <p class="wizard-field__hint">"We'll send invoices and billing notifications to this email"</p>
                </div>

                <div class="wizard-field">
                    <label for="billing_address" class="wizard-field__label">"Billing Address"</label>
                    <textarea
                        id="billing_address"
                        class="wizard-field__input"
                        class:wizard-field__input--error=move || errors.get().address.is_some()
                        rows="3"
                        placeholder="Enter your complete billing address..."
                        prop:value=move || wizard.with(|w| w.draft().billing_address.clone().unwrap_or_default())
                        on:input=on_address
                        disabled=busy
                    ></textarea>
                    {move || errors.get().address.map(|msg| view! { <p class="wizard-field__error">{msg}</p> })}
                    <p class="wizard-field__hint">"Include street address, city, state/province, and postal code"</p>
                </div>
            </Show>

            <div class="wizard-card wizard-card--billing">
                <h4>"Billing Information"</h4>
                <p>
                    {move || {
                        if skip.get() {
                            "You can add billing information later in your organization settings. This won't affect your ability to create events and forms."
                        } else {
                            "This information will be used for invoicing and billing purposes. You can update it anytime in your organization settings."
                        }
                    }}
                </p>
            </div>

            <Show when=move || errors.get().any()>
                <div class="wizard-banner wizard-banner--error">
                    <p>"Please fix the errors above before continuing"</p>
                </div>
            </Show>
        </div>
    }
}
