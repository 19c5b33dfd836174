//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod builder;
pub mod dashboard;
pub mod event_forms;
pub mod events;
pub mod invite_accept;
pub mod login;
pub mod onboarding;
pub mod preview;
pub mod reset_confirm;
pub mod reset_request;
pub mod resend;
pub mod signup;
pub mod verify;
