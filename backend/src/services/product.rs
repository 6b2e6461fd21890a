//! Product management service

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{unique_violation, AppError, AppResult};
use crate::models::Product;
use shared::validation::{parse_uuid, validate_optional_text, validate_required_text, MAX_TEXT_LEN};

/// Service for product CRUD
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating or updating a product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub category_id: String,
    pub group_id: String,
}

impl ProductService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Validate input fields and resolve the referenced category and group.
    /// Reference failures surface as 400s naming the offending field.
    async fn validate_input(&self, input: &ProductInput) -> AppResult<(String, Uuid, Uuid)> {
        validate_required_text(&input.name, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("name", m))?;
        validate_optional_text(input.description.as_deref(), MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;

        let category_id = parse_uuid(&input.category_id)
            .map_err(|_| AppError::validation("categoryId", "Invalid Category Id"))?;
        let group_id = parse_uuid(&input.group_id)
            .map_err(|_| AppError::validation("groupId", "Invalid Group Id"))?;

        let category = sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&self.db)
            .await?;
        if category.is_none() {
            return Err(AppError::not_found("categoryId", "Category not found"));
        }

        let group = sqlx::query_scalar::<_, Uuid>("SELECT id FROM groups WHERE id = $1")
            .bind(group_id)
            .fetch_optional(&self.db)
            .await?;
        if group.is_none() {
            return Err(AppError::not_found("groupId", "Group not found"));
        }

        Ok((input.name.trim().to_string(), category_id, group_id))
    }

    /// Create a new product; names are unique case-insensitively
    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        let (name, category_id, group_id) = self.validate_input(&input).await?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM products WHERE UPPER(name) = UPPER($1)",
        )
        .bind(&name)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(AppError::duplicate("name", "Product already exists"));
        }

        let description = input.description.as_deref().map(str::trim);

        let row = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            INSERT INTO products (name, description, is_active, category_id, group_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, is_active, category_id, group_id
            "#,
        )
        .bind(&name)
        .bind(description)
        .bind(input.is_active)
        .bind(category_id)
        .bind(group_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "name", "Product already exists"))?;

        Ok(Self::from_row(row))
    }

    /// Get all products
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            SELECT id, name, description, is_active, category_id, group_id
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get all active products
    pub async fn list_active(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            SELECT id, name, description, is_active, category_id, group_id
            FROM products
            WHERE is_active
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Get a product by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            SELECT id, name, description, is_active, category_id, group_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Self::from_row))
    }

    /// Update a product; the duplicate check excludes the row itself
    pub async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Product> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Product not found"));
        }

        let (name, category_id, group_id) = self.validate_input(&input).await?;

        let conflicting = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM products WHERE UPPER(name) = UPPER($1) AND id != $2",
        )
        .bind(&name)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        if conflicting.is_some() {
            return Err(AppError::duplicate("name", "Product already exists"));
        }

        let description = input.description.as_deref().map(str::trim);

        let row = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            UPDATE products
            SET name = $1, description = $2, is_active = $3, category_id = $4, group_id = $5
            WHERE id = $6
            RETURNING id, name, description, is_active, category_id, group_id
            "#,
        )
        .bind(&name)
        .bind(description)
        .bind(input.is_active)
        .bind(category_id)
        .bind(group_id)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "name", "Product already exists"))?;

        Ok(Self::from_row(row))
    }

    /// Delete a product by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Product not found"));
        }

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    fn from_row(row: (Uuid, String, Option<String>, bool, Uuid, Uuid)) -> Product {
        Product {
            id: row.0,
            name: row.1,
            description: row.2,
            is_active: row.3,
            category_id: row.4,
            group_id: row.5,
        }
    }
}
