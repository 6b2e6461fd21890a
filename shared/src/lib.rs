//! Shared types and models for the Inventory Management API
//!
//! This crate contains the domain entities exposed over the wire and the
//! pure field-validation rules applied before any database work.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
