//! Domain models for the Inventory Management API

mod batch;
mod catalog;
mod deposit;
mod movement;
mod stock;
mod user;

pub use batch::*;
pub use catalog::*;
pub use deposit::*;
pub use movement::*;
pub use stock::*;
pub use user::*;
