//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod storage;
pub mod task;
pub mod validation;
