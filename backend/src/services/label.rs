//! Label service

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{CreateLabelRequest, LabelResponse, LabelRow, UpdateLabelRequest};
use shared::Id;

/// Label service
#[derive(Clone)]
pub struct LabelService {
    db: PgPool,
}

impl LabelService {
    /// Create a new LabelService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All labels, oldest first
    pub async fn list(&self) -> AppResult<Vec<LabelResponse>> {
        let rows =
            sqlx::query_as::<_, LabelRow>("SELECT id, name, created_at FROM labels ORDER BY id")
                .fetch_all(&self.db)
                .await?;

        Ok(rows.into_iter().map(LabelResponse::from).collect())
    }

    /// Get a label by id
    pub async fn get(&self, id: Id) -> AppResult<LabelResponse> {
        sqlx::query_as::<_, LabelRow>("SELECT id, name, created_at FROM labels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .map(LabelResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Label with id {}", id)))
    }

    /// Create a label; names are unique
    pub async fn create(&self, input: CreateLabelRequest) -> AppResult<LabelResponse> {
        let row = sqlx::query_as::<_, LabelRow>(
            "INSERT INTO labels (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(&input.name)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(label_id = row.id, "Label created");

        Ok(row.into())
    }

    /// Rename a label; an absent name keeps the stored one
    pub async fn update(&self, id: Id, input: UpdateLabelRequest) -> AppResult<LabelResponse> {
        let row = sqlx::query_as::<_, LabelRow>(
            r#"
            UPDATE labels
            SET name = COALESCE($1, name)
            WHERE id = $2
            RETURNING id, name, created_at
            "#,
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Label with id {}", id)))?;

        tracing::info!(label_id = id, "Label updated");

        Ok(row.into())
    }

    /// Delete a label; fails while it is attached to a task
    /// Delete a label; fails while any task still carries it
    pub async fn delete(&self, id: Id) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Label with id {}", id)));
        }

        tracing::info!(label_id = id, "Label deleted");

        Ok(())
    }
}
