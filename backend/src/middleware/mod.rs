//! Request middleware for the Inventory Management API

mod validate;

pub use validate::ValidatedJson;
