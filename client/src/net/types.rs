//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON request and response bodies. List
//! projections (`EventItem`, `FormItem`) only name the fields the UI renders;
//! serde ignores the rest so backend additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials body for `POST /auth/login` and `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Bearer token issued by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Generic `{"status": "..."}` acknowledgement returned by most auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Body for `POST /auth/resend` and `POST /auth/reset/request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Body for `POST /auth/reset/confirm`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetConfirmRequest {
    pub token: String,
    pub new_password: String,
}

/// Identity of the signed-in user from `GET /auth/me`.
///
/// Fetched per dashboard visit and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    #[serde(default)]
    pub org_id: Option<i64>,
    pub role: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub needs_onboarding: bool,
}

/// Read-only projection of a backend event row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EventItem {
    pub id: i64,
    pub name: String,
}

/// Read-only projection of a backend form row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FormItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub public_slug: Option<String>,
}

/// Body for `POST /events` and `POST /events/{id}/forms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameRequest {
    pub name: String,
}

/// `{"id": ...}` returned by create endpoints. Form creation may return `null`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedId {
    #[serde(default)]
    pub id: Option<i64>,
}

/// In-progress organization record accumulated across onboarding steps.
///
/// Optional billing fields are omitted from the request body when unset so
/// the backend's email validation never sees an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
}

impl Default for OrganizationDraft {
    fn default() -> Self {
        Self { name: String::new(), timezone: "UTC".to_owned(), billing_email: None, billing_address: None }
    }
}

/// Partial update applied to an [`OrganizationDraft`] by a step component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftPatch {
    Name(String),
    Timezone(String),
    BillingEmail(String),
    BillingAddress(String),
    /// "Skip billing" clears both billing fields.
    ClearBilling,
}

impl OrganizationDraft {
    /// Merge a single-field patch into the draft. Empty billing values unset the field.
    pub fn apply(&mut self, patch: DraftPatch) {
        match patch {
            DraftPatch::Name(name) => self.name = name,
            DraftPatch::Timezone(tz) => self.timezone = tz,
            DraftPatch::BillingEmail(email) => self.billing_email = non_empty(email),
            DraftPatch::BillingAddress(address) => self.billing_address = non_empty(address),
            DraftPatch::ClearBilling => {
                self.billing_email = None;
                self.billing_address = None;
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Organization summary returned by `POST /organizations`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrganizationSummary {
    pub id: i64,
    pub name: String,
    pub timezone: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Greeting data from `GET /invitations/{token}/preview`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InvitationPreview {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub inviter_name: Option<String>,
}

/// Body for `POST /invitations/{token}/accept`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AcceptInvitationRequest {
    pub password: String,
}
