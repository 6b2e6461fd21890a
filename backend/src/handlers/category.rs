//! Category HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::category::{CategoryInput, CategoryService};
use crate::AppState;

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CategoryInput>,
) -> impl IntoResponse {
    let service = CategoryService::new(state.db.clone());

    match service.create(input).await {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all categories
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let service = CategoryService::new(state.db.clone());

    match service.list().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all active categories
pub async fn list_active_categories(State(state): State<AppState>) -> impl IntoResponse {
    let service = CategoryService::new(state.db.clone());

    match service.list_active().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a category by id; an absent row is 200 with a null body
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = CategoryService::new(state.db.clone());

    match service.get(id).await {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a category by exact description
pub async fn get_category_by_description(
    State(state): State<AppState>,
    Path(description): Path<String>,
) -> impl IntoResponse {
    let service = CategoryService::new(state.db.clone());

    match service.get_by_description(&description).await {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List categories whose description contains the given fragment
pub async fn search_categories_by_description(
    State(state): State<AppState>,
    Path(description): Path<String>,
) -> impl IntoResponse {
    let service = CategoryService::new(state.db.clone());

    match service.search_by_description(&description).await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a category with all its products
pub async fn get_category_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = CategoryService::new(state.db.clone());

    match service.get_with_products(id).await {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a category
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<CategoryInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = CategoryService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = CategoryService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
