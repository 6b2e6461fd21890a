//! Route definitions for the Inventory Management API
//!
//! Resources are mounted at the root: /user, /batch, /deposit, /movement,
//! /movement_item, /product, /group, /stock, /category.

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/user", user_routes())
        .nest("/batch", batch_routes())
        .nest("/deposit", deposit_routes())
        .nest("/movement", movement_routes())
        .nest("/movement_item", movement_item_routes())
        .nest("/product", product_routes())
        .nest("/group", group_routes())
        .nest("/stock", stock_routes())
        .nest("/category", category_routes())
}

/// Category resource
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_categories).post(handlers::create_category))
        .route("/active", get(handlers::list_active_categories))
        .route("/description/:description", get(handlers::get_category_by_description))
        .route("/description-like/:description", get(handlers::search_categories_by_description))
        .route(
            "/:id",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route("/:id/products", get(handlers::get_category_products))
}

/// Group resource
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_groups).post(handlers::create_group))
        .route("/description/:description", get(handlers::get_group_by_description))
        .route("/description-like/:description", get(handlers::search_groups_by_description))
        .route(
            "/:id",
            get(handlers::get_group)
                .put(handlers::update_group)
                .delete(handlers::delete_group),
        )
        .route("/:id/products", get(handlers::get_group_products))
}

/// Product resource
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_products).post(handlers::create_product))
        .route("/active", get(handlers::list_active_products))
        .route(
            "/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Batch resource
fn batch_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_batches).post(handlers::create_batch))
        .route(
            "/:id",
            get(handlers::get_batch)
                .put(handlers::update_batch)
                .delete(handlers::delete_batch),
        )
}

/// Deposit resource
fn deposit_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_deposits).post(handlers::create_deposit))
        .route("/active", get(handlers::list_active_deposits))
        .route(
            "/:id",
            get(handlers::get_deposit)
                .put(handlers::update_deposit)
                .delete(handlers::delete_deposit),
        )
}

/// Stock resource
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stocks).post(handlers::create_stock))
        .route("/deposit/:depositId", get(handlers::get_stocks_by_deposit))
        .route("/batch/:batchId", get(handlers::get_stocks_by_batch))
        .route("/product/:productId", get(handlers::get_stocks_by_product))
        .route(
            "/:id",
            get(handlers::get_stock)
                .put(handlers::update_stock)
                .delete(handlers::delete_stock),
        )
}

/// Movement resource
fn movement_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_movements).post(handlers::create_movement))
        .route("/active", get(handlers::list_active_movements))
        .route(
            "/movementPeriod/:startDate/:endDate",
            get(handlers::get_movements_by_period),
        )
        .route("/movementDate/:movementDate", get(handlers::get_movements_by_date))
        .route(
            "/:id",
            get(handlers::get_movement)
                .put(handlers::update_movement)
                .delete(handlers::delete_movement),
        )
        .route("/:id/items", get(handlers::get_movement_items))
}

/// Movement item resource
fn movement_item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_movement_items).post(handlers::create_movement_item),
        )
        .route(
            "/:id",
            get(handlers::get_movement_item)
                .put(handlers::update_movement_item)
                .delete(handlers::delete_movement_item),
        )
}

/// User resource
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route("/active", get(handlers::list_active_users))
        .route("/firstName/:firstName", get(handlers::search_users_by_first_name))
        .route(
            "/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
}
