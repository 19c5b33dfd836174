//! Advisory client-side field validation.
//!
//! These checks only gate submit controls and inline hints; the backend
//! remains the authority on every rule.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

pub const ORG_NAME_MIN_CHARS: usize = 2;
pub const ORG_NAME_MAX_CHARS: usize = 255;
pub const BILLING_ADDRESS_MAX_CHARS: usize = 500;
/// Minimum password length when accepting an invitation.
pub const INVITE_PASSWORD_MIN_CHARS: usize = 8;
/// Minimum password length when confirming a reset.
pub const RESET_PASSWORD_MIN_CHARS: usize = 6;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Loose `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Organization name: required, 2..=255 characters after trimming.
///
/// # Errors
///
/// Returns the inline message for the first failed rule.
pub fn validate_org_name(value: &str) -> Result<(), &'static str> {
    let len = value.trim().chars().count();
    if len == 0 {
        Err("Organization name is required")
    } else if len < ORG_NAME_MIN_CHARS {
        Err("Organization name must be at least 2 characters")
    } else if len > ORG_NAME_MAX_CHARS {
        Err("Organization name must be less than 255 characters")
    } else {
        Ok(())
    }
}

/// Timezone: required.
///
/// # Errors
///
/// Returns the inline message when empty.
pub fn validate_timezone(value: &str) -> Result<(), &'static str> {
    if value.is_empty() { Err("Timezone is required") } else { Ok(()) }
}

/// Billing email: optional, but must look like an address when present.
///
/// # Errors
///
/// Returns the inline message for a malformed address.
pub fn validate_billing_email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() || is_valid_email(value) {
        Ok(())
    } else {
        Err("Please enter a valid email address")
    }
}

/// Billing address: optional, at most 500 characters.
///
/// # Errors
///
/// Returns the inline message when too long.
pub fn validate_billing_address(value: &str) -> Result<(), &'static str> {
    if value.chars().count() > BILLING_ADDRESS_MAX_CHARS {
        Err("Address must be less than 500 characters")
    } else {
        Ok(())
    }
}

/// True when a non-empty password is shorter than `min_chars` (drives the inline hint).
#[must_use]
pub fn password_too_short(password: &str, min_chars: usize) -> bool {
    let len = password.chars().count();
    len > 0 && len < min_chars
}

/// True when the confirmation has been typed and differs from the password.
#[must_use]
pub fn password_mismatch(password: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && password != confirmation
}

/// Trimmed name for a create request, or `None` when blank.
#[must_use]
pub fn trimmed_name(value: &str) -> Option<String> {
    let name = value.trim();
    (!name.is_empty()).then(|| name.to_owned())
}
