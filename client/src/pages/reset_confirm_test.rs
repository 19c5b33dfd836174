use super::*;

#[test]
fn token_checked_first() {
    assert_eq!(validate_reset_input("", "a", "b"), Err("Token is required"));
}

#[test]
fn mismatch_checked_before_length() {
    assert_eq!(validate_reset_input("t", "abc", "abd"), Err("Passwords do not match"));
}

#[test]
fn short_password_rejected() {
    assert_eq!(validate_reset_input("t", "abcde", "abcde"), Err("Password must be at least 6 characters"));
}

#[test]
fn six_characters_accepted() {
    assert_eq!(validate_reset_input("t", "abcdef", "abcdef"), Ok(()));
}
