//! Movement and movement item models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inventory transaction recorded by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movement_date: DateTime<Utc>,
    pub is_active: bool,
}

/// A line item of a movement, referencing one product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementItem {
    pub id: Uuid,
    pub movement_id: Uuid,
    pub product_id: Uuid,
    pub details: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
}
