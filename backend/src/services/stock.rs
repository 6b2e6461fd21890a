//! Stock management service
//!
//! Stock rows are keyed by a (batch, deposit) pair; at most one row may
//! exist per pair. The pair is checked before insert so the failure comes
//! back as a field-scoped 400, and the composite unique constraint in the
//! schema closes the window between check and insert.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{unique_violation, AppError, AppResult};
use crate::models::Stock;
use shared::validation::{parse_uuid, validate_non_negative};

/// Service for stock CRUD and lookups
#[derive(Clone)]
pub struct StockService {
    db: PgPool,
}

/// Input for creating or updating a stock row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInput {
    pub quantity: Decimal,
    pub deposit_id: String,
    pub batch_id: String,
}

impl StockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Validate the quantity and parse both foreign ids
    fn parse_input(input: &StockInput) -> AppResult<(Decimal, Uuid, Uuid)> {
        validate_non_negative(input.quantity)
            .map_err(|m| AppError::validation("quantity", m))?;
        let batch_id = parse_uuid(&input.batch_id)
            .map_err(|_| AppError::validation("batchId", "Invalid Batch Id"))?;
        let deposit_id = parse_uuid(&input.deposit_id)
            .map_err(|_| AppError::validation("depositId", "Invalid Deposit Id"))?;
        Ok((input.quantity, batch_id, deposit_id))
    }

    /// Resolve both referenced rows, failing 400 on the offending field
    async fn resolve_references(&self, batch_id: Uuid, deposit_id: Uuid) -> AppResult<()> {
        let batch = sqlx::query_scalar::<_, Uuid>("SELECT id FROM batches WHERE id = $1")
            .bind(batch_id)
            .fetch_optional(&self.db)
            .await?;
        if batch.is_none() {
            return Err(AppError::not_found("batchId", "Batch not found"));
        }

        let deposit = sqlx::query_scalar::<_, Uuid>("SELECT id FROM deposits WHERE id = $1")
            .bind(deposit_id)
            .fetch_optional(&self.db)
            .await?;
        if deposit.is_none() {
            return Err(AppError::not_found("depositId", "Deposit not found"));
        }

        Ok(())
    }

    /// Create a stock row for a (batch, deposit) pair that has none yet
    pub async fn create(&self, input: StockInput) -> AppResult<Stock> {
        let (quantity, batch_id, deposit_id) = Self::parse_input(&input)?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM stocks WHERE batch_id = $1 AND deposit_id = $2",
        )
        .bind(batch_id)
        .bind(deposit_id)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(AppError::duplicate("id", "Stock already exists"));
        }

        self.resolve_references(batch_id, deposit_id).await?;

        let row = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            r#"
            INSERT INTO stocks (batch_id, deposit_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, batch_id, deposit_id, quantity
            "#,
        )
        .bind(batch_id)
        .bind(deposit_id)
        .bind(quantity)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "id", "Stock already exists"))?;

        Ok(Self::from_row(row))
    }

    /// Get all stock rows
    pub async fn list(&self) -> AppResult<Vec<Stock>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            "SELECT id, batch_id, deposit_id, quantity FROM stocks",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a stock row by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Stock>> {
        let row = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            "SELECT id, batch_id, deposit_id, quantity FROM stocks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Get all stock rows held at a deposit
    pub async fn list_by_deposit(&self, deposit_id: Uuid) -> AppResult<Vec<Stock>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            "SELECT id, batch_id, deposit_id, quantity FROM stocks WHERE deposit_id = $1",
        )
        .bind(deposit_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all stock rows of a batch
    pub async fn list_by_batch(&self, batch_id: Uuid) -> AppResult<Vec<Stock>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            "SELECT id, batch_id, deposit_id, quantity FROM stocks WHERE batch_id = $1",
        )
        .bind(batch_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all stock rows of a product, joined through its batches
    pub async fn list_by_product(&self, product_id: Uuid) -> AppResult<Vec<Stock>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            r#"
            SELECT s.id, s.batch_id, s.deposit_id, s.quantity
            FROM stocks s
            JOIN batches b ON b.id = s.batch_id
            WHERE b.product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Update a stock row. Moving the row onto a pair another row already
    /// occupies trips the composite constraint and maps to the same 400.
    pub async fn update(&self, id: Uuid, input: StockInput) -> AppResult<Stock> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Stock not found"));
        }

        let (quantity, batch_id, deposit_id) = Self::parse_input(&input)?;
        self.resolve_references(batch_id, deposit_id).await?;

        let row = sqlx::query_as::<_, (Uuid, Uuid, Uuid, Decimal)>(
            r#"
            UPDATE stocks
            SET batch_id = $1, deposit_id = $2, quantity = $3
            WHERE id = $4
            RETURNING id, batch_id, deposit_id, quantity
            "#,
        )
        .bind(batch_id)
        .bind(deposit_id)
        .bind(quantity)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "id", "Stock already exists"))?;

        Ok(Self::from_row(row))
    }

    /// Delete a stock row by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Stock not found"));
        }

        sqlx::query("DELETE FROM stocks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, Uuid, Uuid, Decimal)) -> Stock {
        Stock {
            id: row.0,
            batch_id: row.1,
            deposit_id: row.2,
            quantity: row.3,
        }
    }
}
