use super::*;

#[test]
fn email_shape_accepts_simple_address() {
    assert!(is_valid_email("billing@acme.test"));
    assert!(!is_valid_email("billing@acme"));
    assert!(!is_valid_email("bill ing@acme.test"));
    assert!(!is_valid_email("@acme.test"));
}

#[test]
fn org_name_rules() {
    assert_eq!(validate_org_name("   "), Err("Organization name is required"));
    assert_eq!(validate_org_name(" A "), Err("Organization name must be at least 2 characters"));
    assert_eq!(validate_org_name("Acme"), Ok(()));
    assert_eq!(validate_org_name(&"a".repeat(255)), Ok(()));
    assert_eq!(
        validate_org_name(&"a".repeat(256)),
        Err("Organization name must be less than 255 characters")
    );
}

#[test]
fn timezone_is_required() {
    assert_eq!(validate_timezone(""), Err("Timezone is required"));
    assert_eq!(validate_timezone("Europe/London"), Ok(()));
}

#[test]
fn billing_email_is_optional() {
    assert_eq!(validate_billing_email(""), Ok(()));
    assert_eq!(validate_billing_email("nope"), Err("Please enter a valid email address"));
}

#[test]
fn billing_address_length_limit() {
    assert_eq!(validate_billing_address(&"x".repeat(500)), Ok(()));
    assert_eq!(validate_billing_address(&"x".repeat(501)), Err("Address must be less than 500 characters"));
}

#[test]
fn password_hint_only_after_typing() {
    assert!(!password_too_short("", INVITE_PASSWORD_MIN_CHARS));
    assert!(password_too_short("abc1234", INVITE_PASSWORD_MIN_CHARS));
    assert!(!password_too_short("abcd1234", INVITE_PASSWORD_MIN_CHARS));
    assert!(!password_too_short("abc123", RESET_PASSWORD_MIN_CHARS));
}

#[test]
fn mismatch_hint_only_after_confirmation_typed() {
    assert!(!password_mismatch("abcd1234", ""));
    assert!(password_mismatch("abcd1234", "abcd123"));
    assert!(!password_mismatch("abcd1234", "abcd1234"));
}

#[test]
fn trimmed_name_strips_whitespace() {
    assert_eq!(trimmed_name("  Spring Expo "), Some("Spring Expo".to_owned()));
}

#[test]
fn trimmed_name_rejects_blank() {
    assert_eq!(trimmed_name(""), None);
    assert_eq!(trimmed_name(" \t "), None);
}
