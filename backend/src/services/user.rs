//! User management service
//!
//! Passwords are bcrypt-hashed before storage and never leave this module;
//! the `User` model carries no password field.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{unique_violation, AppError, AppResult};
use crate::models::User;
use shared::validation::{
    validate_email, validate_password, validate_required_text, MAX_NAME_LEN,
};

/// Service for user CRUD and lookups
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

/// Input for creating or updating a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate_input(input: &UserInput) -> AppResult<(String, String, String)> {
        validate_required_text(&input.first_name, MAX_NAME_LEN)
            .map_err(|m| AppError::validation("firstName", m))?;
        validate_required_text(&input.last_name, MAX_NAME_LEN)
            .map_err(|m| AppError::validation("lastName", m))?;
        validate_email(&input.email).map_err(|m| AppError::validation("email", m))?;
        validate_password(&input.password).map_err(|m| AppError::validation("password", m))?;

        Ok((
            input.first_name.trim().to_string(),
            input.last_name.trim().to_string(),
            input.email.trim().to_string(),
        ))
    }

    /// Create a new user; emails are unique case-insensitively
    pub async fn create(&self, input: UserInput) -> AppResult<User> {
        let (first_name, last_name, email) = Self::validate_input(&input)?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(&email)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(AppError::duplicate("email", "Email already registered"));
        }

        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)?;

        let row = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            r#"
            INSERT INTO users (email, first_name, last_name, password_hash, is_active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, email, first_name, last_name, is_active
            "#,
        )
        .bind(&email)
        .bind(&first_name)
        .bind(&last_name)
        .bind(&password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "email", "Email already registered"))?;

        Ok(Self::from_row(row))
    }

    /// Get all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            r#"
            SELECT id, email, first_name, last_name, is_active
            FROM users
            ORDER BY first_name, last_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all active users
    pub async fn list_active(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            r#"
            SELECT id, email, first_name, last_name, is_active
            FROM users
            WHERE is_active
            ORDER BY first_name, last_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all users whose first name contains the given fragment
    pub async fn search_by_first_name(&self, fragment: &str) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            r#"
            SELECT id, email, first_name, last_name, is_active
            FROM users
            WHERE first_name LIKE '%' || $1 || '%'
            ORDER BY first_name, last_name
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a user by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            "SELECT id, email, first_name, last_name, is_active FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Update a user; the email duplicate check excludes the row itself
    pub async fn update(&self, id: Uuid, input: UserInput) -> AppResult<User> {
        let (first_name, last_name, email) = Self::validate_input(&input)?;

        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "User not found"));
        }

        let conflicting = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE LOWER(email) = LOWER($1) AND id != $2",
        )
        .bind(&email)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        if conflicting.is_some() {
            return Err(AppError::duplicate("email", "Email already registered"));
        }

        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)?;

        let row = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            r#"
            UPDATE users
            SET email = $1, first_name = $2, last_name = $3, password_hash = $4
            WHERE id = $5
            RETURNING id, email, first_name, last_name, is_active
            "#,
        )
        .bind(&email)
        .bind(&first_name)
        .bind(&last_name)
        .bind(&password_hash)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "email", "Email already registered"))?;

        Ok(Self::from_row(row))
    }

    /// Delete a user by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "User not found"));
        }

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, String, String, String, bool)) -> User {
        User {
            id: row.0,
            email: row.1,
            first_name: row.2,
            last_name: row.3,
            is_active: row.4,
        }
    }
}
