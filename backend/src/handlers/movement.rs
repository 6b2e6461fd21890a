//! Movement HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::movement::{CreateMovementInput, MovementService, UpdateMovementInput};
use crate::AppState;

/// Create a new movement
pub async fn create_movement(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovementInput>,
) -> impl IntoResponse {
    let service = MovementService::new(state.db.clone());

    match service.create(input).await {
        Ok(movement) => (StatusCode::CREATED, Json(movement)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all movements
pub async fn list_movements(State(state): State<AppState>) -> impl IntoResponse {
    let service = MovementService::new(state.db.clone());

    match service.list().await {
        Ok(movements) => (StatusCode::OK, Json(movements)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all active movements
pub async fn list_active_movements(State(state): State<AppState>) -> impl IntoResponse {
    let service = MovementService::new(state.db.clone());

    match service.list_active().await {
        Ok(movements) => (StatusCode::OK, Json(movements)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a movement by id; an absent row is 200 with a null body
pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementService::new(state.db.clone());

    match service.get(id).await {
        Ok(movement) => (StatusCode::OK, Json(movement)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a movement with its line items
pub async fn get_movement_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementService::new(state.db.clone());

    match service.get_with_items(id).await {
        Ok(movement) => (StatusCode::OK, Json(movement)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List movements within an inclusive date period
pub async fn get_movements_by_period(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> impl IntoResponse {
    let service = MovementService::new(state.db.clone());

    match service.list_by_period(&start_date, &end_date).await {
        Ok(movements) => (StatusCode::OK, Json(movements)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List movements on a given calendar date
pub async fn get_movements_by_date(
    State(state): State<AppState>,
    Path(movement_date): Path<String>,
) -> impl IntoResponse {
    let service = MovementService::new(state.db.clone());

    match service.list_by_date(&movement_date).await {
        Ok(movements) => (StatusCode::OK, Json(movements)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a movement
pub async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateMovementInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(movement) => (StatusCode::OK, Json(movement)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a movement
pub async fn delete_movement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = MovementService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
