//! Group management service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{unique_violation, AppError, AppResult};
use crate::models::{Group, Product};
use shared::validation::{validate_required_text, MAX_TEXT_LEN};

/// Service for group CRUD and lookups
#[derive(Clone)]
pub struct GroupService {
    db: PgPool,
}

/// Input for creating or updating a group
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInput {
    pub description: String,
}

/// A group together with the products it contains
#[derive(Debug, Clone, Serialize)]
pub struct GroupWithProducts {
    #[serde(flatten)]
    pub group: Group,
    pub products: Vec<Product>,
}

impl GroupService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a new group; descriptions are unique case-insensitively
    pub async fn create(&self, input: GroupInput) -> AppResult<Group> {
        validate_required_text(&input.description, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;
        let description = input.description.trim().to_string();

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM groups WHERE UPPER(description) = UPPER($1)",
        )
        .bind(&description)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(AppError::duplicate("description", "Group already exists"));
        }

        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            INSERT INTO groups (description)
            VALUES ($1)
            RETURNING id, description
            "#,
        )
        .bind(&description)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "description", "Group already exists"))?;

        Ok(Group {
            id: row.0,
            description: row.1,
        })
    }

    /// Get all groups
    pub async fn list(&self) -> AppResult<Vec<Group>> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, description FROM groups ORDER BY description",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Group {
                id: r.0,
                description: r.1,
            })
            .collect())
    }

    /// Get a group by id
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Group>> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, description FROM groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Group {
            id: r.0,
            description: r.1,
        }))
    }

    /// Get a group by exact description
    pub async fn get_by_description(&self, description: &str) -> AppResult<Option<Group>> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, description FROM groups WHERE description = $1",
        )
        .bind(description)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Group {
            id: r.0,
            description: r.1,
        }))
    }

    /// Get the first group whose description contains the given fragment
    pub async fn search_by_description(&self, fragment: &str) -> AppResult<Option<Group>> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT id, description
            FROM groups
            WHERE description LIKE '%' || $1 || '%'
            ORDER BY description
            LIMIT 1
            "#,
        )
        .bind(fragment)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Group {
            id: r.0,
            description: r.1,
        }))
    }

    /// Get a group with all products it contains
    pub async fn get_with_products(&self, id: Uuid) -> AppResult<Option<GroupWithProducts>> {
        let group = match self.get(id).await? {
            Some(group) => group,
            None => return Ok(None),
        };

        let products = sqlx::query_as::<_, (Uuid, String, Option<String>, bool, Uuid, Uuid)>(
            r#"
            SELECT id, name, description, is_active, category_id, group_id
            FROM products
            WHERE group_id = $1
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

        Ok(Some(GroupWithProducts { group, products }))
    }

    /// Update a group; the duplicate check excludes the row itself
    pub async fn update(&self, id: Uuid, input: GroupInput) -> AppResult<Group> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Group not found"));
        }

        validate_required_text(&input.description, MAX_TEXT_LEN)
            .map_err(|m| AppError::validation("description", m))?;
        let description = input.description.trim().to_string();

        let conflicting = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM groups WHERE UPPER(description) = UPPER($1) AND id != $2",
        )
        .bind(&description)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        if conflicting.is_some() {
            return Err(AppError::duplicate("description", "Group already exists"));
        }

        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            UPDATE groups
            SET description = $1
            WHERE id = $2
            RETURNING id, description
            "#,
        )
        .bind(&description)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| unique_violation(e, "description", "Group already exists"))?;

        Ok(Group {
            id: row.0,
            description: row.1,
        })
    }

    /// Delete a group by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.get(id).await?.is_none() {
            return Err(AppError::not_found("id", "Group not found"));
        }

        sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
