//! Movement item management service
//!
//! Items are independent line entries: no movement total is derived or
//! cached, so creating or mutating an item never touches its movement.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::MovementItem;
use shared::validation::{
    parse_uuid, validate_non_negative, validate_optional_text, MAX_TEXT_LEN,
};

/// Service for movement item CRUD
#[derive(Clone)]
pub struct MovementItemService {
    db: PgPool,
}

/// Input for creating a movement item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovementItemInput {
    pub details: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
    pub movement_id: String,
    pub product_id: String,
}

/// Input for updating a movement item; the movement and product references
/// are fixed at creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovementItemInput {
    pub details: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
}

impl MovementItemService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate_fields(
        details: Option<&str>,
        price: Decimal,
        quantity: Decimal,
    ) -> AppResult<()> {
        validate_optional_text(details, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("details", m))?;
        validate_non_negative(price).map_err(|m| AppError::validation("price", m))?;
        validate_non_negative(quantity).map_err(|m| AppError::validation("quantity", m))?;
        Ok(())
    }

    /// Create a new line item; both references are resolved before any write
    pub async fn create(&self, input: CreateMovementItemInput) -> AppResult<MovementItem> {
        Self::validate_fields(input.details.as_deref(), input.price, input.quantity)?;

        let movement_id = parse_uuid(&input.movement_id)
            .map_err(|_| AppError::validation("movementId", "Invalid Movement Id"))?;
        let product_id = parse_uuid(&input.product_id)
            .map_err(|_| AppError::validation("productId", "Invalid Product Id"))?;

        let movement = sqlx::query_scalar::<_, Uuid>("SELECT id FROM movements WHERE id = $1")
            .bind(movement_id)
            .fetch_optional(&self.db)
            .await?;
        if movement.is_none() {
            return Err(AppError::not_found("movementId", "Movement not found"));
        }

        let product = sqlx::query_scalar::<_, Uuid>("SELECT id FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.db)
            .await?;
        if product.is_none() {
            return Err(AppError::not_found("productId", "Product not found"));
        }

        let details = input.details.as_deref().map(str::trim);

        let row = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Option<String>, Decimal, Decimal)>(
            r#"
            INSERT INTO movement_items (movement_id, product_id, details, price, quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, movement_id, product_id, details, price, quantity
            "#,
        )
        .bind(movement_id)
        .bind(product_id)
        .bind(details)
        .bind(input.price)
        .bind(input.quantity)
        .fetch_one(&self.db)
        .await?;

        Ok(Self::from_row(row))
    }

    /// Get all movement items
    pub async fn list(&self) -> AppResult<Vec<MovementItem>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Option<String>, Decimal, Decimal)>(
            "SELECT id, movement_id, product_id, details, price, quantity FROM movement_items",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a movement item by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<MovementItem>> {
        let row = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Option<String>, Decimal, Decimal)>(
            r#"
            SELECT id, movement_id, product_id, details, price, quantity
            FROM movement_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Update a movement item's mutable fields
    pub async fn update(&self, id: Uuid, input: UpdateMovementItemInput) -> AppResult<MovementItem> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Movement item not found"));
        }

        Self::validate_fields(input.details.as_deref(), input.price, input.quantity)?;
        let details = input.details.as_deref().map(str::trim);

        let row = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Option<String>, Decimal, Decimal)>(
            r#"
            UPDATE movement_items
            SET details = $1, price = $2, quantity = $3
            WHERE id = $4
            RETURNING id, movement_id, product_id, details, price, quantity
            "#,
        )
        .bind(details)
        .bind(input.price)
        .bind(input.quantity)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(Self::from_row(row))
    }

    /// Delete a movement item by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Movement item not found"));
        }

        sqlx::query("DELETE FROM movement_items WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, Uuid, Uuid, Option<String>, Decimal, Decimal)) -> MovementItem {
        MovementItem {
            id: row.0,
            movement_id: row.1,
            product_id: row.2,
            details: row.3,
            price: row.4,
            quantity: row.5,
        }
    }
}
