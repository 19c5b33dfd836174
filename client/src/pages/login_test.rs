use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(validate_login_input("  user@local.dev  ", "secret"), Ok("user@local.dev".to_owned()));
}

#[test]
fn validate_login_input_requires_email_first() {
    assert_eq!(validate_login_input("   ", ""), Err("Please enter your email address"));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.co", "   "), Err("Please enter your password"));
}

#[test]
fn validate_login_input_keeps_password_untrimmed() {
    assert!(validate_login_input("a@b.co", " pass ").is_ok());
}

#[test]
fn password_toggle_switches_input_type() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
