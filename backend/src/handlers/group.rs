//! Group HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::group::{GroupInput, GroupService};
use crate::AppState;

/// Create a new group
pub async fn create_group(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<GroupInput>,
) -> impl IntoResponse {
    let service = GroupService::new(state.db.clone());

    match service.create(input).await {
        Ok(group) => (StatusCode::CREATED, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all groups
pub async fn list_groups(State(state): State<AppState>) -> impl IntoResponse {
    let service = GroupService::new(state.db.clone());

    match service.list().await {
        Ok(groups) => (StatusCode::OK, Json(groups)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a group by id; an absent row is 200 with a null body
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = GroupService::new(state.db.clone());

    match service.get(id).await {
        Ok(group) => (StatusCode::OK, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a group by exact description
pub async fn get_group_by_description(
    State(state): State<AppState>,
    Path(description): Path<String>,
) -> impl IntoResponse {
    let service = GroupService::new(state.db.clone());

    match service.get_by_description(&description).await {
        Ok(group) => (StatusCode::OK, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get the first group whose description contains the given fragment
pub async fn search_groups_by_description(
    State(state): State<AppState>,
    Path(description): Path<String>,
) -> impl IntoResponse {
    let service = GroupService::new(state.db.clone());

    match service.search_by_description(&description).await {
        Ok(group) => (StatusCode::OK, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a group with all its products
pub async fn get_group_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = GroupService::new(state.db.clone());

    match service.get_with_products(id).await {
        Ok(group) => (StatusCode::OK, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a group
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<GroupInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = GroupService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(group) => (StatusCode::OK, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a group
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = GroupService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
