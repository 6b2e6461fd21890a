//! Batch management service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Batch;
use shared::validation::{
    parse_datetime, parse_uuid, validate_expiration_date, validate_required_text, MAX_TEXT_LEN,
};

/// Service for batch CRUD
#[derive(Clone)]
pub struct BatchService {
    db: PgPool,
}

/// Input for creating or updating a batch
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInput {
    pub description: String,
    pub expiration_date: String,
    pub product_id: String,
}

impl BatchService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Validate input fields and resolve the referenced product.
    /// The expiration date must not already be in the past.
    async fn validate_input(&self, input: &BatchInput) -> AppResult<(String, DateTime<Utc>, Uuid)> {
        validate_required_text(&input.description, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;

        let expiration_date = parse_datetime(&input.expiration_date)
            .map_err(|m| AppError::validation("expirationDate", m))?;
        validate_expiration_date(expiration_date, Utc::now())
            .map_err(|m| AppError::validation("expirationDate", m))?;

        let product_id = parse_uuid(&input.product_id)
            .map_err(|_| AppError::validation("productId", "Invalid Product Id"))?;

        let product = sqlx::query_scalar::<_, Uuid>("SELECT id FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.db)
            .await?;
        if product.is_none() {
            return Err(AppError::not_found("productId", "Product not found"));
        }

        Ok((
            input.description.trim().to_string(),
            expiration_date,
            product_id,
        ))
    }

    /// Create a new batch for a product
    pub async fn create(&self, input: BatchInput) -> AppResult<Batch> {
        let (description, expiration_date, product_id) = self.validate_input(&input).await?;

        let row = sqlx::query_as::<_, (Uuid, String, DateTime<Utc>, Uuid)>(
            r#"
            INSERT INTO batches (description, expiration_date, product_id)
            VALUES ($1, $2, $3)
            RETURNING id, description, expiration_date, product_id
            "#,
        )
        .bind(&description)
        .bind(expiration_date)
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        Ok(Self::from_row(row))
    }

    /// Get all batches
    pub async fn list(&self) -> AppResult<Vec<Batch>> {
        let rows = sqlx::query_as::<_, (Uuid, String, DateTime<Utc>, Uuid)>(
            r#"
            SELECT id, description, expiration_date, product_id
            FROM batches
            ORDER BY expiration_date
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a batch by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Batch>> {
        let row = sqlx::query_as::<_, (Uuid, String, DateTime<Utc>, Uuid)>(
            r#"
            SELECT id, description, expiration_date, product_id
            FROM batches
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Update a batch
    pub async fn update(&self, id: Uuid, input: BatchInput) -> AppResult<Batch> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Batch not found"));
        }

        let (description, expiration_date, product_id) = self.validate_input(&input).await?;

        let row = sqlx::query_as::<_, (Uuid, String, DateTime<Utc>, Uuid)>(
            r#"
            UPDATE batches
            SET description = $1, expiration_date = $2, product_id = $3
            WHERE id = $4
            RETURNING id, description, expiration_date, product_id
            "#,
        )
        .bind(&description)
        .bind(expiration_date)
        .bind(product_id)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(Self::from_row(row))
    }

    /// Delete a batch by id; stock rows for the batch are removed by the
    /// database-level cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Batch not found"));
        }

        sqlx::query("DELETE FROM batches WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, String, DateTime<Utc>, Uuid)) -> Batch {
        Batch {
            id: row.0,
            description: row.1,
            expiration_date: row.2,
            product_id: row.3,
        }
    }
}
