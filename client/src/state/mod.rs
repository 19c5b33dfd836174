//! Client-side view-state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages construct these fresh per activation and drive them through pure
//! transition methods; only the session token outlives a page.

pub mod builder;
pub mod onboarding;
pub mod session;
