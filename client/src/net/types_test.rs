use super::*;

// =============================================================
// Responses
// =============================================================

#[test]
fn login_response_defaults_token_type() {
    let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(resp.access_token, "abc");
    assert_eq!(resp.token_type, "bearer");
}

#[test]
fn user_profile_accepts_missing_org() {
    let profile: UserProfile = serde_json::from_str(r#"{"user_id":7,"org_id":null,"role":"Admin","verified":true}"#).unwrap();
    assert_eq!(profile.user_id, 7);
    assert_eq!(profile.org_id, None);
    assert_eq!(profile.role, "Admin");
    assert!(!profile.needs_onboarding);
}

#[test]
fn event_item_ignores_extra_columns() {
    let items: Vec<EventItem> = serde_json::from_str(
        r#"[{"id":1,"name":"Expo","status":"Draft","timezone":"UTC","created_date":"2024-01-01T00:00:00"}]"#,
    )
    .unwrap();
    assert_eq!(items, vec![EventItem { id: 1, name: "Expo".to_owned() }]);
}

#[test]
fn form_item_slug_is_optional() {
    let item: FormItem = serde_json::from_str(r#"{"id":3,"name":"Signup","public_slug":null}"#).unwrap();
    assert_eq!(item.public_slug, None);
}

#[test]
fn created_id_may_be_null() {
    let created: CreatedId = serde_json::from_str(r#"{"id":null}"#).unwrap();
    assert_eq!(created.id, None);
}

#[test]
fn invitation_preview_without_inviter() {
    let preview: InvitationPreview = serde_json::from_str(r#"{"email":"new@acme.test"}"#).unwrap();
    assert_eq!(preview.email, "new@acme.test");
    assert_eq!(preview.inviter_name, None);
}

// =============================================================
// OrganizationDraft
// =============================================================

#[test]
fn draft_defaults_to_utc_without_billing() {
    let draft = OrganizationDraft::default();
    assert_eq!(draft.name, "");
    assert_eq!(draft.timezone, "UTC");
    assert_eq!(serde_json::to_value(&draft).unwrap(), serde_json::json!({ "name": "", "timezone": "UTC" }));
}

#[test]
fn draft_serializes_billing_when_present() {
    let mut draft = OrganizationDraft::default();
    draft.apply(DraftPatch::Name("Acme".to_owned()));
    draft.apply(DraftPatch::BillingEmail("billing@acme.test".to_owned()));
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({ "name": "Acme", "timezone": "UTC", "billing_email": "billing@acme.test" })
    );
}

#[test]
fn draft_empty_billing_value_unsets_field() {
    let mut draft = OrganizationDraft::default();
    draft.apply(DraftPatch::BillingAddress("1 Main St".to_owned()));
    draft.apply(DraftPatch::BillingAddress(String::new()));
    assert_eq!(draft.billing_address, None);
}

#[test]
fn draft_clear_billing_removes_both_fields() {
    let mut draft = OrganizationDraft::default();
    draft.apply(DraftPatch::BillingEmail("a@b.co".to_owned()));
    draft.apply(DraftPatch::BillingAddress("1 Main St".to_owned()));
    draft.apply(DraftPatch::ClearBilling);
    assert_eq!(draft.billing_email, None);
    assert_eq!(draft.billing_address, None);
}

#[test]
fn reset_confirm_request_uses_new_password_key() {
    let body = ResetConfirmRequest { token: "t".to_owned(), new_password: "secret1".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "token": "t", "new_password": "secret1" }));
}
