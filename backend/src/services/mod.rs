//! Business logic services for the Inventory Management API

pub mod batch;
pub mod category;
pub mod deposit;
pub mod group;
pub mod movement;
pub mod movement_item;
pub mod product;
pub mod stock;
pub mod user;

pub use batch::BatchService;
pub use category::CategoryService;
pub use deposit::DepositService;
pub use group::GroupService;
pub use movement::MovementService;
pub use movement_item::MovementItemService;
pub use product::ProductService;
pub use stock::StockService;
pub use user::UserService;
