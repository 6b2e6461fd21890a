//! Body validation wrapper
//!
//! Replaces axum's default JSON rejection (plain-text 422/400) with the
//! API's field-scoped error shape, so a malformed body fails the same way
//! a schema violation does.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON extractor whose rejection uses the `{"error": {...}}` shape
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation("body", rejection.body_text()))?;
        Ok(ValidatedJson(value))
    }
}
