//! Deposit management service

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{unique_violation, AppError, AppResult};
use crate::models::Deposit;
use shared::validation::{validate_optional_text, validate_required_text, MAX_TEXT_LEN};

/// Service for deposit CRUD
#[derive(Clone)]
pub struct DepositService {
    db: PgPool,
}

/// Input for creating a deposit; new deposits start active
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositInput {
    pub name: String,
    pub description: Option<String>,
}

/// Input for updating a deposit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepositInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl DepositService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate_fields(name: &str, description: Option<&str>) -> AppResult<String> {
        validate_required_text(name, MAX_TEXT_LEN).map_err(|m| AppError::validation("name", m))?;
        validate_optional_text(description, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;
        Ok(name.trim().to_string())
    }

    /// Create a new deposit; names are unique case-insensitively
    pub async fn create(&self, input: CreateDepositInput) -> AppResult<Deposit> {
        let name = Self::validate_fields(&input.name, input.description.as_deref())?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM deposits WHERE UPPER(name) = UPPER($1)",
        )
        .bind(&name)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(AppError::duplicate("name", "Deposit already exists"));
        }

        let description = input.description.as_deref().map(str::trim);

        let row = sqlx::query_as::<_, (Uuid, String, Option<String>, bool)>(
            r#"
            INSERT INTO deposits (name, description, is_active)
            VALUES ($1, $2, TRUE)
            RETURNING id, name, description, is_active
            "#,
        )
        .bind(&name)
        .bind(description)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "name", "Deposit already exists"))?;

        Ok(Self::from_row(row))
    }

    /// Get all deposits
    pub async fn list(&self) -> AppResult<Vec<Deposit>> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, bool)>(
            "SELECT id, name, description, is_active FROM deposits ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all active deposits
    pub async fn list_active(&self) -> AppResult<Vec<Deposit>> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, bool)>(
            "SELECT id, name, description, is_active FROM deposits WHERE is_active ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a deposit by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Deposit>> {
        let row = sqlx::query_as::<_, (Uuid, String, Option<String>, bool)>(
            "SELECT id, name, description, is_active FROM deposits WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Update a deposit; the duplicate check excludes the row itself
    pub async fn update(&self, id: Uuid, input: UpdateDepositInput) -> AppResult<Deposit> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Deposit not found"));
        }

        let name = Self::validate_fields(&input.name, input.description.as_deref())?;

        let conflicting = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM deposits WHERE UPPER(name) = UPPER($1) AND id != $2",
        )
        .bind(&name)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        if conflicting.is_some() {
            return Err(AppError::duplicate("name", "Deposit already exists"));
        }

        let description = input.description.as_deref().map(str::trim);

        let row = sqlx::query_as::<_, (Uuid, String, Option<String>, bool)>(
            r#"
            UPDATE deposits
            SET name = $1, description = $2, is_active = $3
            WHERE id = $4
            RETURNING id, name, description, is_active
            "#,
        )
        .bind(&name)
        .bind(description)
        .bind(input.is_active)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "name", "Deposit already exists"))?;

        Ok(Self::from_row(row))
    }

    /// Delete a deposit by id; stock rows at the deposit are removed by the
    /// database-level cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Deposit not found"));
        }

        sqlx::query("DELETE FROM deposits WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, String, Option<String>, bool)) -> Deposit {
        Deposit {
            id: row.0,
            name: row.1,
            description: row.2,
            is_active: row.3,
        }
    }
}
