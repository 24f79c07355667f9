//! Task status service

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{
    CreateTaskStatusRequest, TaskStatusResponse, TaskStatusRow, UpdateTaskStatusRequest,
};
use shared::Id;

/// Task status service
#[derive(Clone)]
pub struct TaskStatusService {
    db: PgPool,
}

impl TaskStatusService {
    /// Create a new TaskStatusService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All statuses, oldest first
    pub async fn list(&self) -> AppResult<Vec<TaskStatusResponse>> {
        let rows = sqlx::query_as::<_, TaskStatusRow>(
            "SELECT id, name, slug, created_at FROM task_statuses ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(TaskStatusResponse::from).collect())
    }

    /// Get a status by id
    pub async fn get(&self, id: Id) -> AppResult<TaskStatusResponse> {
        sqlx::query_as::<_, TaskStatusRow>(
            "SELECT id, name, slug, created_at FROM task_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .map(TaskStatusResponse::from)
        .ok_or_else(|| AppError::NotFound(format!("TaskStatus with id {}", id)))
    }

    /// Create a status; name and slug are both unique
    pub async fn create(&self, input: CreateTaskStatusRequest) -> AppResult<TaskStatusResponse> {
        let row = sqlx::query_as::<_, TaskStatusRow>(
            r#"
            INSERT INTO task_statuses (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.slug)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(task_status_id = row.id, slug = %row.slug, "Task status created");

        Ok(row.into())
    }

    /// Update a status; absent fields keep their value
    pub async fn update(
        &self,
        id: Id,
        input: UpdateTaskStatusRequest,
    ) -> AppResult<TaskStatusResponse> {
        let row = sqlx::query_as::<_, TaskStatusRow>(
            r#"
            UPDATE task_statuses
            SET name = COALESCE($1, name),
                slug = COALESCE($2, slug)
            WHERE id = $3
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(input.name.as_deref().map(str::trim))
        .bind(&input.slug)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("TaskStatus with id {}", id)))?;

        tracing::info!(task_status_id = id, "Task status updated");

        Ok(row.into())
    }

    /// Delete a status; fails while any task still uses it
    pub async fn delete(&self, id: Id) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM task_statuses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("TaskStatus with id {}", id)));
        }

        tracing::info!(task_status_id = id, "Task status deleted");

        Ok(())
    }
}
