//! Stock HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::parse_path_id;
use crate::middleware::ValidatedJson;
use crate::services::stock::{StockInput, StockService};
use crate::AppState;

/// Create a new stock row
pub async fn create_stock(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<StockInput>,
) -> impl IntoResponse {
    let service = StockService::new(state.db.clone());

    match service.create(input).await {
        Ok(stock) => (StatusCode::CREATED, Json(stock)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all stock rows
pub async fn list_stocks(State(state): State<AppState>) -> impl IntoResponse {
    let service = StockService::new(state.db.clone());

    match service.list().await {
        Ok(stocks) => (StatusCode::OK, Json(stocks)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a stock row by id; an absent row is 200 with a null body
pub async fn get_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = StockService::new(state.db.clone());

    match service.get(id).await {
        Ok(stock) => (StatusCode::OK, Json(stock)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List stock held at a deposit
pub async fn get_stocks_by_deposit(
    State(state): State<AppState>,
    Path(deposit_id): Path<String>,
) -> impl IntoResponse {
    let deposit_id = match parse_path_id("depositId", "Invalid Deposit Id", &deposit_id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = StockService::new(state.db.clone());

    match service.list_by_deposit(deposit_id).await {
        Ok(stocks) => (StatusCode::OK, Json(stocks)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List stock of a batch
pub async fn get_stocks_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> impl IntoResponse {
    let batch_id = match parse_path_id("batchId", "Invalid Batch Id", &batch_id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = StockService::new(state.db.clone());

    match service.list_by_batch(batch_id).await {
        Ok(stocks) => (StatusCode::OK, Json(stocks)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List stock of a product, across all of its batches
pub async fn get_stocks_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    let product_id = match parse_path_id("productId", "Invalid Product Id", &product_id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = StockService::new(state.db.clone());

    match service.list_by_product(product_id).await {
        Ok(stocks) => (StatusCode::OK, Json(stocks)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a stock row
pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<StockInput>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = StockService::new(state.db.clone());

    match service.update(id, input).await {
        Ok(stock) => (StatusCode::OK, Json(stock)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a stock row
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_path_id("id", "Invalid Id", &id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let service = StockService::new(state.db.clone());

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
