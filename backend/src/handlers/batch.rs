//! Batch HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::batch::{BatchInput, BatchService};
use crate::AppState;

/// Create a new batch
pub async fn create_batch(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<BatchInput>,
) -> impl IntoResponse {
    let service = BatchService::new(state.db.clone());

    match service.create(input).await {
        Ok(batch) => (StatusCode::CREATED, Json(batch)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all batches
pub async fn list_batches(State(state): State<AppState>) -> impl IntoResponse {
    let service = BatchService::new(state.db.clone());

    match service.list().await {
        Ok(batches) => (StatusCode::OK, Json(batches)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a batch by id; an absent row is 200 with a null body
pub async fn get_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = BatchService::new(state.db.clone());

    match service.get(id).await {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a batch
pub async fn update_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<BatchInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = BatchService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a batch
pub async fn delete_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = BatchService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
