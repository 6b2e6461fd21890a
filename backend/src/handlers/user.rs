//! User HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::user::{UserInput, UserService};
use crate::AppState;

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> impl IntoResponse {
    let service = UserService::new(state.db.clone());

    match service.create(input).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let service = UserService::new(state.db.clone());

    match service.list().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all active users
pub async fn list_active_users(State(state): State<AppState>) -> impl IntoResponse {
    let service = UserService::new(state.db.clone());

    match service.list_active().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List users whose first name contains the given fragment
pub async fn search_users_by_first_name(
    State(state): State<AppState>,
    Path(first_name): Path<String>,
) -> impl IntoResponse {
    let service = UserService::new(state.db.clone());

    match service.search_by_first_name(&first_name).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a user by id; an absent row is 200 with a null body
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = UserService::new(state.db.clone());

    match service.get(id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = UserService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = UserService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
