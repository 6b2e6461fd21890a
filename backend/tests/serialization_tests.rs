//! Tests for the JSON wire shape of the domain models
//!
//! Every model serializes with camelCase keys, and optional fields
//! serialize as explicit nulls rather than being omitted.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use uuid::Uuid;

use shared::models::{Batch, Category, Deposit, Group, Movement, MovementItem, Product, Stock, User};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

// ============================================================================
// Catalog Models
// ============================================================================

mod catalog_models {
    use super::*;

    #[test]
    fn category_wire_shape() {
        let category = Category {
            id: id(1),
            description: "Beverages".to_string(),
            is_active: true,
        };

        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "description": "Beverages",
                "isActive": true,
            })
        );
    }

    #[test]
    fn group_wire_shape() {
        let group = Group {
            id: id(2),
            description: "Perishables".to_string(),
        };

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["description"], "Perishables");
        assert!(value.get("isActive").is_none());
    }

    #[test]
    fn product_optional_description_is_null() {
        let product = Product {
            id: id(3),
            name: "Espresso Beans".to_string(),
            description: None,
            is_active: true,
            category_id: id(1),
            group_id: id(2),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value["description"].is_null());
        assert_eq!(value["categoryId"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(value["groupId"], "00000000-0000-0000-0000-000000000002");
    }
}

// ============================================================================
// Storage Models
// ============================================================================

mod storage_models {
    use super::*;

    #[test]
    fn batch_wire_shape() {
        let batch = Batch {
            id: id(4),
            description: "Lot 2026-03".to_string(),
            expiration_date: Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap(),
            product_id: id(3),
        };

        let value = serde_json::to_value(&batch).unwrap();
        assert_eq!(value["expirationDate"], "2026-12-31T00:00:00Z");
        assert_eq!(value["productId"], "00000000-0000-0000-0000-000000000003");
    }

    #[test]
    fn deposit_wire_shape() {
        let deposit = Deposit {
            id: id(5),
            name: "Main Warehouse".to_string(),
            description: Some("Building A".to_string()),
            is_active: false,
        };

        let value = serde_json::to_value(&deposit).unwrap();
        assert_eq!(value["name"], "Main Warehouse");
        assert_eq!(value["isActive"], false);
    }

    #[test]
    fn stock_wire_shape() {
        let stock = Stock {
            id: id(6),
            batch_id: id(4),
            deposit_id: id(5),
            quantity: dec("42.50"),
        };

        let value = serde_json::to_value(&stock).unwrap();
        assert_eq!(value["batchId"], "00000000-0000-0000-0000-000000000004");
        assert_eq!(value["depositId"], "00000000-0000-0000-0000-000000000005");
        assert_eq!(value["quantity"], "42.50");
    }
}

// ============================================================================
// Movement Models
// ============================================================================

mod movement_models {
    use super::*;

    #[test]
    fn movement_wire_shape() {
        let movement = Movement {
            id: id(7),
            user_id: id(9),
            movement_date: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            is_active: true,
        };

        let value = serde_json::to_value(&movement).unwrap();
        assert_eq!(value["userId"], "00000000-0000-0000-0000-000000000009");
        assert_eq!(value["movementDate"], "2026-03-01T09:30:00Z");
    }

    #[test]
    fn movement_item_wire_shape() {
        let item = MovementItem {
            id: id(8),
            movement_id: id(7),
            product_id: id(3),
            details: None,
            price: dec("9.99"),
            quantity: dec("3"),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["movementId"], "00000000-0000-0000-0000-000000000007");
        assert!(value["details"].is_null());
        assert_eq!(value["price"], "9.99");
    }
}

// ============================================================================
// User Model
// ============================================================================

mod user_model {
    use super::*;

    #[test]
    fn user_never_exposes_credentials() {
        let user = User {
            id: id(9),
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            is_active: true,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["lastName"], "Silva");
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
    }
}
