//! Service plumbing shared by the backoffice services.
//!
//! Tracing setup, request ids, the JSON error envelope, health handlers,
//! environment helpers and wire-format serializers live here. Nothing in this
//! crate knows about staff accounts.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
