//! User model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account.
///
/// The password hash is never part of this struct; it stays in the
/// database and is only touched by the user service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}
