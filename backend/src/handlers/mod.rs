//! HTTP handlers for the Inventory Management API

mod batch;
mod category;
mod deposit;
mod group;
mod health;
mod movement;
mod movement_item;
mod product;
mod stock;
mod user;

pub use batch::*;
pub use category::*;
pub use deposit::*;
pub use group::*;
pub use health::*;
pub use movement::*;
pub use movement_item::*;
pub use product::*;
pub use stock::*;
pub use user::*;

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Parse a path parameter that must be a UUID, failing with the API's
/// field-scoped 400 instead of axum's default rejection
pub(crate) fn parse_path_id(
    field: &'static str,
    message: &'static str,
    value: &str,
) -> AppResult<Uuid> {
    shared::validation::parse_uuid(value).map_err(|_| AppError::validation(field, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uuid_passes_through() {
        let id = Uuid::new_v4();
        assert_eq!(parse_path_id("id", "Invalid Id", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn non_uuid_becomes_field_scoped_validation_error() {
        let err = parse_path_id("depositId", "Invalid Deposit Id", "not-a-uuid").unwrap_err();
        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "depositId");
                assert_eq!(message, "Invalid Deposit Id");
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn empty_path_id_is_rejected() {
        assert!(parse_path_id("id", "Invalid Id", "").is_err());
    }
}
