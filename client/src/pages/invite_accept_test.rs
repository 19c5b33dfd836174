use super::*;

fn form(password: &str, confirmation: &str) -> AcceptForm {
    AcceptForm {
        token: "inv-1".to_owned(),
        password: password.to_owned(),
        confirmation: confirmation.to_owned(),
        submitting: false,
    }
}

#[test]
fn seven_char_password_keeps_submit_disabled() {
    let f = form("abc1234", "abc1234");
    assert!(f.submit_disabled());
    assert!(f.show_too_short());
}

#[test]
fn eight_char_matching_password_enables_submit() {
    let f = form("abcd1234", "abcd1234");
    assert!(!f.submit_disabled());
    assert!(!f.show_too_short());
    assert!(!f.show_mismatch());
}

#[test]
fn mismatch_disables_submit_and_shows_hint() {
    let f = form("abcd1234", "abcd12345");
    assert!(f.submit_disabled());
    assert!(f.show_mismatch());
}

#[test]
fn missing_token_or_in_flight_disables_submit() {
    let mut f = form("abcd1234", "abcd1234");
    f.token.clear();
    assert!(f.submit_disabled());
    let mut f = form("abcd1234", "abcd1234");
    f.submitting = true;
    assert!(f.submit_disabled());
}

#[test]
fn empty_fields_show_no_hints() {
    let f = form("", "");
    assert!(!f.show_too_short());
    assert!(!f.show_mismatch());
    assert!(f.submit_disabled());
}

#[test]
fn expired_invitation_copy_is_verbatim() {
    let err = ApiError::from_response(410, r#"{"detail":"Invitation expired"}"#, "x");
    assert_eq!(
        accept_error_message(&err),
        "This invitation link has expired. Please ask your admin to resend the invitation."
    );
}

#[test]
fn unknown_invitation_copy() {
    let err = ApiError::from_response(404, "", "x");
    assert_eq!(
        accept_error_message(&err),
        "This invitation link is invalid. Please check the link or request a new one."
    );
}

#[test]
fn other_rejections_surface_backend_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"Invitation already accepted"}"#, ACCEPT_FALLBACK);
    assert_eq!(accept_error_message(&err), "Invitation already accepted");
    let err = ApiError::from_response(500, r#"{"error":"boom"}"#, ACCEPT_FALLBACK);
    assert_eq!(accept_error_message(&err), ACCEPT_FALLBACK);
}

#[test]
fn network_failure_copy() {
    assert_eq!(accept_error_message(&ApiError::Network), "Unable to reach the server. Please try again.");
}

#[test]
fn greeting_uses_preview_email() {
    let g = Greeting::from_preview(InvitationPreview { email: "new@acme.test".to_owned(), inviter_name: None });
    assert_eq!(greeting_line(Some(&g)), "Hi new@acme.test.");
    assert_eq!(inviter_label(Some(&g)), "Admin");
}

#[test]
fn greeting_falls_back_when_preview_failed() {
    assert_eq!(greeting_line(None), "Welcome.");
    assert_eq!(inviter_label(None), "your admin");
}

#[test]
fn greeting_names_inviter_when_known() {
    let g = Greeting::from_preview(InvitationPreview {
        email: "new@acme.test".to_owned(),
        inviter_name: Some("Dana".to_owned()),
    });
    assert_eq!(inviter_label(Some(&g)), "Dana");
}

#[test]
fn login_redirect_encodes_email() {
    assert_eq!(login_redirect_path(Some("new+1@acme.test")), "/login?email=new%2B1%40acme.test");
    assert_eq!(login_redirect_path(None), "/login");
    assert_eq!(login_redirect_path(Some("")), "/login");
}
