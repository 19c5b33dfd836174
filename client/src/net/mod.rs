//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues one HTTP request per backend operation, `error` classifies
//! failures, and `types` defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
