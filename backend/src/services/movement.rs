//! Movement management service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Movement;
use shared::validation::{parse_datetime, parse_uuid, validate_movement_date, validate_period};

/// Service for movement CRUD and date lookups
#[derive(Clone)]
pub struct MovementService {
    db: PgPool,
}

/// Input for creating a movement; new movements start active
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovementInput {
    pub movement_date: String,
    pub user_id: String,
}

/// Input for updating a movement
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovementInput {
    pub movement_date: String,
    pub user_id: String,
    pub is_active: bool,
}

/// A movement together with its line items and each item's product
#[derive(Debug, Clone, Serialize)]
pub struct MovementWithItems {
    #[serde(flatten)]
    pub movement: Movement,
    pub items: Vec<MovementItemInfo>,
}

/// Line item info for display, carrying the product's name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementItemInfo {
    pub id: Uuid,
    pub details: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
    pub product_id: Uuid,
    pub product_name: String,
}

impl MovementService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Parse and validate the movement date; future dates are rejected
    fn parse_movement_date(value: &str) -> AppResult<DateTime<Utc>> {
        let date = parse_datetime(value)
            .map_err(|m| AppError::validation("movementDate", m))?;
        validate_movement_date(date, Utc::now())
            .map_err(|m| AppError::validation("movementDate", m))?;
        Ok(date)
    }

    /// Resolve the recording user, failing 400 on `userId`
    async fn resolve_user(&self, user_id: &str) -> AppResult<Uuid> {
        let user_id = parse_uuid(user_id)
            .map_err(|_| AppError::validation("userId", "Invalid User Id"))?;

        let user = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?;
        if user.is_none() {
            return Err(AppError::not_found("userId", "User not found"));
        }

        Ok(user_id)
    }

    /// Create a new movement recorded by a user
    pub async fn create(&self, input: CreateMovementInput) -> AppResult<Movement> {
        let movement_date = Self::parse_movement_date(&input.movement_date)?;
        let user_id = self.resolve_user(&input.user_id).await?;

        let row = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            r#"
            INSERT INTO movements (user_id, movement_date, is_active)
            VALUES ($1, $2, TRUE)
            RETURNING id, user_id, movement_date, is_active
            "#,
        )
        .bind(user_id)
        .bind(movement_date)
        .fetch_one(&self.db)
        .await?;

        Ok(Self::from_row(row))
    }

    /// Get all movements
    pub async fn list(&self) -> AppResult<Vec<Movement>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            r#"
            SELECT id, user_id, movement_date, is_active
            FROM movements
            ORDER BY movement_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all active movements
    pub async fn list_active(&self) -> AppResult<Vec<Movement>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            r#"
            SELECT id, user_id, movement_date, is_active
            FROM movements
            WHERE is_active
            ORDER BY movement_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a movement by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Movement>> {
        let row = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            "SELECT id, user_id, movement_date, is_active FROM movements WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Get a movement with its line items and each item's product name
    pub async fn get_with_items(&self, id: Uuid) -> AppResult<Option<MovementWithItems>> {
        let movement = match self.get(id).await? {
            Some(movement) => movement,
            None => return Ok(None),
        };

        let items = sqlx::query_as::<_, (Uuid, Option<String>, Decimal, Decimal, Uuid, String)>(
            r#"
            SELECT mi.id, mi.details, mi.price, mi.quantity, mi.product_id, p.name
            FROM movement_items mi
            JOIN products p ON p.id = mi.product_id
            WHERE mi.movement_id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|r| MovementItemInfo {
            id: r.0,
            details: r.1,
            price: r.2,
            quantity: r.3,
            product_id: r.4,
            product_name: r.5,
        })
        .collect();

        Ok(Some(MovementWithItems { movement, items }))
    }

    /// Get all movements within a period, inclusive on both ends
    pub async fn list_by_period(&self, start: &str, end: &str) -> AppResult<Vec<Movement>> {
        let start_date = parse_datetime(start)
            .map_err(|m| AppError::validation("startDate", m))?;
        let end_date = parse_datetime(end)
            .map_err(|m| AppError::validation("endDate", m))?;
        validate_period(start_date, end_date)
            .map_err(|m| AppError::validation("endDate", m))?;

        let rows = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            r#"
            SELECT id, user_id, movement_date, is_active
            FROM movements
            WHERE movement_date >= $1 AND movement_date <= $2
            ORDER BY movement_date
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all movements on a given calendar date
    pub async fn list_by_date(&self, date: &str) -> AppResult<Vec<Movement>> {
        let movement_date = parse_datetime(date)
            .map_err(|m| AppError::validation("movementDate", m))?;

        let rows = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            r#"
            SELECT id, user_id, movement_date, is_active
            FROM movements
            WHERE movement_date::date = $1::date
            ORDER BY movement_date
            "#,
        )
        .bind(movement_date)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Update a movement; the missing-row check runs before the user lookup
    pub async fn update(&self, id: Uuid, input: UpdateMovementInput) -> AppResult<Movement> {
        let movement_date = Self::parse_movement_date(&input.movement_date)?;

        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Movement not found"));
        }

        let user_id = self.resolve_user(&input.user_id).await?;

        let row = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>, bool)>(
            r#"
            UPDATE movements
            SET user_id = $1, movement_date = $2, is_active = $3
            WHERE id = $4
            RETURNING id, user_id, movement_date, is_active
            "#,
        )
        .bind(user_id)
        .bind(movement_date)
        .bind(input.is_active)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(Self::from_row(row))
    }

    /// Delete a movement by id; its items are removed by the cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Movement not found"));
        }

        sqlx::query("DELETE FROM movements WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, Uuid, DateTime<Utc>, bool)) -> Movement {
        Movement {
            id: row.0,
            user_id: row.1,
            movement_date: row.2,
            is_active: row.3,
        }
    }
}
