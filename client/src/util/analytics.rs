//! Onboarding funnel analytics.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard and its step components report through [`OnboardingAnalytics`].
//! The shipped implementation writes structured `log` records under the
//! `analytics` target; tests substitute [`RecordingAnalytics`].

use std::sync::Arc;

use crate::net::types::OrganizationDraft;
use crate::state::onboarding::WizardStep;

/// Focus changes reported for individual fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAction {
    Focused,
    Blurred,
}

impl FieldAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focused => "focused",
            Self::Blurred => "blurred",
        }
    }
}

/// Sink for onboarding funnel events.
pub trait OnboardingAnalytics {
    fn step_started(&self, step: WizardStep);
    fn step_completed(&self, step: WizardStep);
    fn button_click(&self, button: &str, step: WizardStep);
    fn validation_error(&self, field: &str, message: &str);
    fn field_interaction(&self, field: &str, action: FieldAction);
    fn wizard_completed(&self, draft: &OrganizationDraft);
}

/// Logs each event at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleAnalytics;

impl OnboardingAnalytics for ConsoleAnalytics {
    fn step_started(&self, step: WizardStep) {
        log::info!(target: "analytics", "onboarding_step_started step={}", step.id());
    }

    fn step_completed(&self, step: WizardStep) {
        log::info!(target: "analytics", "onboarding_step_completed step={}", step.id());
    }

    fn button_click(&self, button: &str, step: WizardStep) {
        log::info!(target: "analytics", "onboarding_button_click button={button} step={}", step.id());
    }

    fn validation_error(&self, field: &str, message: &str) {
        log::info!(target: "analytics", "onboarding_validation_error field={field} message={message}");
    }

    fn field_interaction(&self, field: &str, action: FieldAction) {
        log::info!(target: "analytics", "onboarding_field_interaction field={field} action={}", action.as_str());
    }

    fn wizard_completed(&self, draft: &OrganizationDraft) {
        log::info!(
            target: "analytics",
            "onboarding_wizard_completed timezone={} has_billing_email={} has_billing_address={}",
            draft.timezone,
            draft.billing_email.is_some(),
            draft.billing_address.is_some()
        );
    }
}

/// Turn a field check into its inline message, reporting failures.
pub fn report_check(
    field: &str,
    result: Result<(), &'static str>,
    analytics: &dyn OnboardingAnalytics,
) -> Option<&'static str> {
    match result {
        Ok(()) => None,
        Err(message) => {
            analytics.validation_error(field, message);
            Some(message)
        }
    }
}

/// Context handle so the wizard and its step components share one sink.
#[derive(Clone)]
pub struct Analytics(Arc<dyn OnboardingAnalytics + Send + Sync>);

impl Analytics {
    pub fn new(sink: impl OnboardingAnalytics + Send + Sync + 'static) -> Self {
        Self(Arc::new(sink))
    }

    #[must_use]
    pub fn sink(&self) -> &dyn OnboardingAnalytics {
        self.0.as_ref()
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(ConsoleAnalytics)
    }
}

/// Analytics provided by the nearest ancestor, or console logging.
pub fn use_analytics() -> Analytics {
    leptos::prelude::use_context::<Analytics>().unwrap_or_default()
}

/// Captures events as strings for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    pub events: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingAnalytics {
    pub fn take(&self) -> Vec<String> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
impl OnboardingAnalytics for RecordingAnalytics {
    fn step_started(&self, step: WizardStep) {
        self.push(format!("started:{}", step.id()));
    }

    fn step_completed(&self, step: WizardStep) {
        self.push(format!("completed:{}", step.id()));
    }

    fn button_click(&self, button: &str, step: WizardStep) {
        self.push(format!("click:{button}:{}", step.id()));
    }

    fn validation_error(&self, field: &str, message: &str) {
        self.push(format!("invalid:{field}:{message}"));
    }

    fn field_interaction(&self, field: &str, action: FieldAction) {
        self.push(format!("field:{field}:{}", action.as_str()));
    }

    fn wizard_completed(&self, draft: &OrganizationDraft) {
        self.push(format!("wizard_completed:{}", draft.name));
    }
}
