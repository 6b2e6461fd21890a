//! Movement item HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::movement_item::{
    CreateMovementItemInput, MovementItemService, UpdateMovementItemInput,
};
use crate::AppState;

/// Create a new movement item
pub async fn create_movement_item(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovementItemInput>,
) -> impl IntoResponse {
    let service = MovementItemService::new(state.db.clone());

    match service.create(input).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all movement items
pub async fn list_movement_items(State(state): State<AppState>) -> impl IntoResponse {
    let service = MovementItemService::new(state.db.clone());

    match service.list().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a movement item by id; an absent row is 200 with a null body
pub async fn get_movement_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementItemService::new(state.db.clone());

    match service.get(id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a movement item
pub async fn update_movement_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateMovementItemInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementItemService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a movement item
pub async fn delete_movement_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementItemService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
