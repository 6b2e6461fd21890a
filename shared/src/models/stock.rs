//! Stock model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quantity on hand for one batch at one deposit.
///
/// At most one stock row may exist per (batch, deposit) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub deposit_id: Uuid,
    pub quantity: Decimal,
}
