//! Onboarding wizard state machine.
//!
//! DESIGN
//! ======
//! Three ordered steps: organization basics, billing info, success. The
//! draft accumulates across steps and is submitted from the penultimate
//! step; `Success` is only entered through [`OnboardingWizard::finish_submit`]
//! with a created organization. Step components validate their own fields,
//! so the controller never re-validates the draft.
//!
//! Step analytics fire on every entry and exit, so a step revisited via
//! Previous then Next is counted twice.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use crate::net::error::ApiError;
use crate::net::types::{DraftPatch, OrganizationDraft, OrganizationSummary};
use crate::util::analytics::OnboardingAnalytics;

/// Where the success step's exit action navigates.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Ordered wizard steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    OrganizationBasics,
    BillingInfo,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::OrganizationBasics, Self::BillingInfo, Self::Success];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::OrganizationBasics => 0,
            Self::BillingInfo => 1,
            Self::Success => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier used in analytics events.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::OrganizationBasics => "organization_basics",
            Self::BillingInfo => "billing_info",
            Self::Success => "success",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::OrganizationBasics => "Organization Details",
            Self::BillingInfo => "Billing Information",
            Self::Success => "Welcome!",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::OrganizationBasics => "Tell us about your organization",
            Self::BillingInfo => "Set up billing details (optional)",
            Self::Success => "Your organization is ready",
        }
    }
}

/// The forward control shown for the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Submit,
}

impl PrimaryAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Submit => "Create Organisation",
        }
    }
}

/// Wizard controller state, constructed fresh per visit to `/onboarding`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OnboardingWizard {
    step: WizardStep,
    draft: OrganizationDraft,
    busy: bool,
    error: Option<String>,
    created: Option<OrganizationSummary>,
}

impl OnboardingWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &OrganizationDraft {
        &self.draft
    }

    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn created(&self) -> Option<&OrganizationSummary> {
        self.created.as_ref()
    }

    /// Completion percentage rounded to the nearest whole number.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        let total = WizardStep::ALL.len();
        ((self.step.index() + 1) * 100 + total / 2) / total
    }

    #[must_use]
    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.step.index() + 1, WizardStep::ALL.len())
    }

    /// `None` on the terminal step, which only offers the dashboard exit.
    #[must_use]
    pub fn primary_action(&self) -> Option<PrimaryAction> {
        let last = WizardStep::ALL.len() - 1;
        match self.step.index() {
            i if i == last => None,
            i if i + 1 == last => Some(PrimaryAction::Submit),
            _ => Some(PrimaryAction::Next),
        }
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.step.index() > 0
    }

    /// Report entry into the current step (wizard mounted).
    pub fn activate(&self, analytics: &dyn OnboardingAnalytics) {
        analytics.step_started(self.step);
    }

    /// Report exit from the current step (wizard unmounted).
    pub fn deactivate(&self, analytics: &dyn OnboardingAnalytics) {
        analytics.step_completed(self.step);
    }

    fn move_to(&mut self, to: WizardStep, analytics: &dyn OnboardingAnalytics) {
        analytics.step_completed(self.step);
        self.step = to;
        analytics.step_started(to);
    }

    /// Advance without a network call. Only valid before the penultimate step.
    pub fn next(&mut self, analytics: &dyn OnboardingAnalytics) -> bool {
        if self.primary_action() != Some(PrimaryAction::Next) {
            return false;
        }
        let Some(to) = WizardStep::from_index(self.step.index() + 1) else {
            return false;
        };
        analytics.button_click("next", self.step);
        self.move_to(to, analytics);
        self.error = None;
        true
    }

    /// Step back one index. No-op on the first step.
    pub fn previous(&mut self, analytics: &dyn OnboardingAnalytics) -> bool {
        let Some(to) = self.step.index().checked_sub(1).and_then(WizardStep::from_index) else {
            return false;
        };
        analytics.button_click("previous", self.step);
        self.move_to(to, analytics);
        self.error = None;
        true
    }

    pub fn update_draft(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// Mark a submission in flight and hand back the draft to send.
    ///
    /// Returns `None` when not on the submitting step or already busy.
    pub fn begin_submit(&mut self) -> Option<OrganizationDraft> {
        if self.busy || self.primary_action() != Some(PrimaryAction::Submit) {
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Apply the organization-create result. Success force-advances to the terminal step.
    pub fn finish_submit(
        &mut self,
        result: Result<OrganizationSummary, ApiError>,
        analytics: &dyn OnboardingAnalytics,
    ) {
        self.busy = false;
        match result {
            Ok(summary) => {
                self.created = Some(summary);
                analytics.wizard_completed(&self.draft);
                self.move_to(WizardStep::Success, analytics);
            }
            Err(err) => {
                let message = err.to_string();
                analytics.validation_error("organization_creation", &message);
                self.error = Some(message);
            }
        }
    }

    /// Abort a submission before any request was issued.
    pub fn reject_submit(&mut self, message: &str) {
        self.busy = false;
        self.error = Some(message.to_owned());
    }

    /// Exit action from the terminal step; returns the navigation target.
    pub fn complete(&self, analytics: &dyn OnboardingAnalytics) -> &'static str {
        analytics.button_click("go_to_dashboard", self.step);
        DASHBOARD_PATH
    }
}
