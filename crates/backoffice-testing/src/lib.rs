//! Test utilities for backoffice services.
//!
//! Provides a migrated in-memory SQLite database. Import from test code only,
//! never from production code.

pub mod db;
