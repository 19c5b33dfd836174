use super::*;
use crate::net::types::DraftPatch;

#[test]
fn basics_step_needs_valid_name() {
    let mut draft = OrganizationDraft::default();
    assert!(!step_ready(WizardStep::OrganizationBasics, &draft));
    draft.apply(DraftPatch::Name("Acme Events".to_owned()));
    assert!(step_ready(WizardStep::OrganizationBasics, &draft));
}

#[test]
fn billing_step_ready_without_billing_data() {
    let draft = OrganizationDraft::default();
    assert!(step_ready(WizardStep::BillingInfo, &draft));
}

#[test]
fn billing_step_blocks_bad_email() {
    let mut draft = OrganizationDraft::default();
    draft.apply(DraftPatch::BillingEmail("not-an-email".to_owned()));
    assert!(!step_ready(WizardStep::BillingInfo, &draft));
}

#[test]
fn success_step_has_no_forward_control() {
    assert!(!step_ready(WizardStep::Success, &OrganizationDraft::default()));
}

#[test]
fn indicator_marks_done_active_pending() {
    assert_eq!(indicator_state(0, 1), "done");
    assert_eq!(indicator_state(1, 1), "active");
    assert_eq!(indicator_state(2, 1), "pending");
}
