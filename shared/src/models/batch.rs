//! Batch model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An expiration-dated lot of a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: Uuid,
    pub description: String,
    pub expiration_date: DateTime<Utc>,
    pub product_id: Uuid,
}
