//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render onboarding steps, the builder chrome, and the auth gate
//! while reading/writing state owned by their parent page.

pub mod auth_gate;
pub mod billing_info_step;
pub mod builder_shell;
pub mod organization_basics_step;
pub mod success_step;
