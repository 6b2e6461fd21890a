//! Deposit HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::deposit::{CreateDepositInput, DepositService, UpdateDepositInput};
use crate::AppState;

/// Create a new deposit
pub async fn create_deposit(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDepositInput>,
) -> impl IntoResponse {
    let service = DepositService::new(state.db.clone());

    match service.create(input).await {
        Ok(deposit) => (StatusCode::CREATED, Json(deposit)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all deposits
pub async fn list_deposits(State(state): State<AppState>) -> impl IntoResponse {
    let service = DepositService::new(state.db.clone());

    match service.list().await {
        Ok(deposits) => (StatusCode::OK, Json(deposits)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all active deposits
pub async fn list_active_deposits(State(state): State<AppState>) -> impl IntoResponse {
    let service = DepositService::new(state.db.clone());

    match service.list_active().await {
        Ok(deposits) => (StatusCode::OK, Json(deposits)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a deposit by id; an absent row is 200 with a null body
pub async fn get_deposit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = DepositService::new(state.db.clone());

    match service.get(id).await {
        Ok(deposit) => (StatusCode::OK, Json(deposit)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a deposit
pub async fn update_deposit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateDepositInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = DepositService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(deposit) => (StatusCode::OK, Json(deposit)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a deposit
pub async fn delete_deposit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = DepositService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
