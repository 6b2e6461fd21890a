//! Database models for the Inventory Management API
//!
//! Re-exports models from the shared crate; composite read models live in
//! the service that builds them.

pub use shared::models::*;
