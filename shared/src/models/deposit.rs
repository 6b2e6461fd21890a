//! Deposit model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical storage location holding stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}
