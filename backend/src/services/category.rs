//! Category management service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{unique_violation, AppError, AppResult};
use crate::models::{Category, Product};
use shared::validation::{validate_required_text, MAX_TEXT_LEN};

/// Service for category CRUD and lookups
#[derive(Clone)]
pub struct CategoryService {
    db: PgPool,
}

/// Input for creating or updating a category
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub description: String,
    pub is_active: bool,
}

/// A category together with the products organized under it
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}

impl CategoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a new category; descriptions are unique case-insensitively
    pub async fn create(&self, input: CategoryInput) -> AppResult<Category> {
        validate_required_text(&input.description, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;
        let description = input.description.trim().to_string();

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM categories WHERE UPPER(description) = UPPER($1)",
        )
        .bind(&description)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(AppError::duplicate("description", "Category already exists"));
        }

        let row = sqlx::query_as::<_, (Uuid, String, bool)>(
            r#"
            INSERT INTO categories (description, is_active)
            VALUES ($1, $2)
            RETURNING id, description, is_active
            "#,
        )
        .bind(&description)
        .bind(input.is_active)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "description", "Category already exists"))?;

        Ok(Category {
            id: row.0,
            description: row.1,
            is_active: row.2,
        })
    }

    /// Get all categories
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, description, is_active FROM categories ORDER BY description",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.0,
                description: r.1,
                is_active: r.2,
            })
            .collect())
    }

    /// Get all active categories
    pub async fn list_active(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, description, is_active FROM categories WHERE is_active ORDER BY description",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.0,
                description: r.1,
                is_active: r.2,
            })
            .collect())
    }

    /// Get a category by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, description, is_active FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Category {
            id: r.0,
            description: r.1,
            is_active: r.2,
        }))
    }

    /// Get a category by exact description
    pub async fn get_by_description(&self, description: &str) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, (Uuid, String, bool)>(
            "SELECT id, description, is_active FROM categories WHERE description = $1",
        )
        .bind(description)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Category {
            id: r.0,
            description: r.1,
            is_active: r.2,
        }))
    }

    /// Get all categories whose description contains the given fragment
    pub async fn search_by_description(&self, fragment: &str) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, (Uuid, String, bool)>(
            r#"
            SELECT id, description, is_active
            FROM categories
            WHERE description LIKE '%' || $1 || '%'
            ORDER BY description
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.0,
                description: r.1,
                is_active: r.2,
            })
            .collect())
    }

    /// Get a category with all products organized under it
    pub async fn get_with_products(&self, id: Uuid) -> AppResult<Option<CategoryWithProducts>> {
        let category = match self.get(id).await? {
            Some(category) => category,
            None => return Ok(None),
        };

        let products = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            SELECT id, name, description, is_active, category_id, group_id
            FROM products
            WHERE category_id = $1
            ORDER BY name
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|r| Product {
            id: r.0,
            name: r.1,
            description: r.2,
            is_active: r.3,
            category_id: r.4,
            group_id: r.5,
        })
        .collect();

        Ok(Some(CategoryWithProducts { category, products }))
    }

    /// Update a category; the duplicate check excludes the row itself so
    /// writing back an unchanged description succeeds
    pub async fn update(&self, id: Uuid, input: CategoryInput) -> AppResult<Category> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Category not found"));
        }

        validate_required_text(&input.description, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;
        let description = input.description.trim().to_string();

        let conflicting = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM categories WHERE UPPER(description) = UPPER($1) AND id != $2",
        )
        .bind(&description)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        if conflicting.is_some() {
            return Err(AppError::duplicate("description", "Category already exists"));
        }

        let row = sqlx::query_as::<_, (Uuid, String, bool)>(
            r#"
            UPDATE categories
            SET description = $1, is_active = $2
            WHERE id = $3
            RETURNING id, description, is_active
            "#,
        )
        .bind(&description)
        .bind(input.is_active)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "description", "Category already exists"))?;

        Ok(Category {
            id: row.0,
            description: row.1,
            is_active: row.2,
        })
    }

    /// Delete a category by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Category not found"));
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
