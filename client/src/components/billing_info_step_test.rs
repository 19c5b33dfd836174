use super::*;
use crate::util::analytics::RecordingAnalytics;

#[test]
fn malformed_email_reports_error() {
    let analytics = RecordingAnalytics::default();
    let mut errors = BillingErrors::default();
    errors.check_email("billing@", &analytics);
    assert_eq!(errors.email, Some("Please enter a valid email address"));
    assert_eq!(analytics.take(), vec!["invalid:billing_email:Please enter a valid email address"]);
}

#[test]
fn clearing_email_removes_error() {
    let analytics = RecordingAnalytics::default();
    let mut errors = BillingErrors::default();
    errors.check_email("nope", &analytics);
    errors.check_email("", &analytics);
    assert!(!errors.any());
}

#[test]
fn long_address_is_flagged() {
    let analytics = RecordingAnalytics::default();
    let mut errors = BillingErrors::default();
    errors.check_address(&"a".repeat(501), &analytics);
    assert_eq!(errors.address, Some("Address must be less than 500 characters"));
    errors.check_address(&"a".repeat(500), &analytics);
    assert_eq!(errors.address, None);
}

#[test]
fn skip_clears_billing_fields_and_errors() {
    let analytics = RecordingAnalytics::default();
    let mut wizard = OnboardingWizard::new();
    wizard.update_draft(DraftPatch::BillingEmail("bad".to_owned()));
    wizard.update_draft(DraftPatch::BillingAddress("1 Main St".to_owned()));
    let mut errors = BillingErrors::default();
    errors.check_email("bad", &analytics);

    apply_skip(&mut wizard, &mut errors, true);

    assert_eq!(wizard.draft().billing_email, None);
    assert_eq!(wizard.draft().billing_address, None);
    assert_eq!(errors, BillingErrors::default());
}

#[test]
fn unskipping_keeps_draft() {
    let mut wizard = OnboardingWizard::new();
    wizard.update_draft(DraftPatch::BillingAddress("1 Main St".to_owned()));
    let mut errors = BillingErrors::default();
    apply_skip(&mut wizard, &mut errors, false);
    assert_eq!(wizard.draft().billing_address.as_deref(), Some("1 Main St"));
}

#[test]
fn ready_when_billing_absent_or_valid() {
    let mut draft = OrganizationDraft::default();
    assert!(billing_ready(&draft));
    draft.apply(DraftPatch::BillingEmail("billing@acme.test".to_owned()));
    assert!(billing_ready(&draft));
    draft.apply(DraftPatch::BillingEmail("billing@acme".to_owned()));
    assert!(!billing_ready(&draft));
}
