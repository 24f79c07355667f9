//! Task service: CRUD, label links and filtered listing

use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::error::{AppError, AppResult};
use crate::models::{CreateTaskRequest, TaskFilter, TaskResponse, TaskRow, UpdateTaskRequest};
use shared::Id;

/// Task service
#[derive(Clone)]
pub struct TaskService {
    db: PgPool,
}

/// Projection shared by every task read; label ids are aggregated per task
const TASK_SELECT: &str = r#"
    SELECT t.id,
           t."index",
           t.title,
           t.description,
           ts.slug AS status_slug,
           t.assignee_id,
           COALESCE(ARRAY_AGG(tl.label_id) FILTER (WHERE tl.label_id IS NOT NULL), '{}') AS label_ids,
           t.created_at
    FROM tasks t
    JOIN task_statuses ts ON ts.id = t.task_status_id
    LEFT JOIN task_labels tl ON tl.task_id = t.id
    WHERE 1 = 1"#;

const TASK_GROUP: &str = " GROUP BY t.id, ts.slug ORDER BY t.id";

impl TaskService {
    /// Create a new TaskService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List tasks matching every filter that is set
    pub async fn list(&self, filter: &TaskFilter) -> AppResult<Vec<TaskResponse>> {
        let mut query = build_list_query(filter);
        let rows = query
            .build_query_as::<TaskRow>()
            .fetch_all(&self.db)
            .await?;

        Ok(rows.into_iter().map(TaskResponse::from).collect())
    }

    pub async fn get(&self, id: Id) -> AppResult<TaskResponse> {
        let mut query = QueryBuilder::<Postgres>::new(TASK_SELECT);
        query.push(" AND t.id = ").push_bind(id).push(TASK_GROUP);

        query
            .build_query_as::<TaskRow>()
            .fetch_optional(&self.db)
            .await?
            .map(TaskResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Task with id {}", id)))
    }

    /// Create a task, resolving its status slug, assignee and labels
    pub async fn create(&self, input: CreateTaskRequest) -> AppResult<TaskResponse> {
        let mut tx = self.db.begin().await?;

        let status_id = resolve_status(&mut tx, &input.status).await?;
        if let Some(assignee_id) = input.assignee_id {
            ensure_user_exists(&mut tx, assignee_id).await?;
        }
        let label_ids = normalize_ids(input.task_label_ids.unwrap_or_default());
        ensure_labels_exist(&mut tx, &label_ids).await?;

        let task_id = sqlx::query_scalar::<_, Id>(
            r#"
            INSERT INTO tasks ("index", title, description, task_status_id, assignee_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(input.index)
        .bind(&input.title)
        .bind(&input.content)
        .bind(status_id)
        .bind(input.assignee_id)
        .fetch_one(&mut *tx)
        .await?;

        link_labels(&mut tx, task_id, &label_ids).await?;

        tx.commit().await?;

        tracing::info!(task_id, status = %input.status, labels = label_ids.len(), "Task created");

        self.get(task_id).await
    }

    /// Update a task; absent fields keep their value
    pub async fn update(&self, id: Id, input: UpdateTaskRequest) -> AppResult<TaskResponse> {
        let mut tx = self.db.begin().await?;

        let exists = sqlx::query_scalar::<_, Id>("SELECT id FROM tasks WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Task with id {}", id)));
        }

        let status_id = match input.status.as_deref() {
            Some(slug) => Some(resolve_status(&mut tx, slug).await?),
            None => None,
        };
        if let Some(Some(assignee_id)) = input.assignee_id {
            ensure_user_exists(&mut tx, assignee_id).await?;
        }

        let (set_content, content) = match input.content {
            Some(content) => (true, content),
            None => (false, None),
        };
        let (set_assignee, assignee_id) = match input.assignee_id {
            Some(assignee_id) => (true, assignee_id),
            None => (false, None),
        };

        sqlx::query(
            r#"
            UPDATE tasks
            SET "index" = COALESCE($1, "index"),
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                task_status_id = COALESCE($5, task_status_id),
                assignee_id = CASE WHEN $6 THEN $7 ELSE assignee_id END
            WHERE id = $8
            "#,
        )
        .bind(input.index)
        .bind(&input.title)
        .bind(set_content)
        .bind(&content)
        .bind(status_id)
        .bind(set_assignee)
        .bind(assignee_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if let Some(label_ids) = input.task_label_ids {
            let label_ids = normalize_ids(label_ids);
            ensure_labels_exist(&mut tx, &label_ids).await?;

            sqlx::query("DELETE FROM task_labels WHERE task_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_labels(&mut tx, id, &label_ids).await?;
        }

        tx.commit().await?;

        tracing::info!(task_id = id, "Task updated");

        self.get(id).await
    }

    /// Delete a task; its label links go with it
    pub async fn delete(&self, id: Id) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task with id {}", id)));
        }

        tracing::info!(task_id = id, "Task deleted");

        Ok(())
    }
}

/// Compose the list query; every filter value is a bound parameter
pub fn build_list_query(filter: &TaskFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new(TASK_SELECT);

    if let Some(title) = filter.title_needle() {
        query
            .push(" AND LOWER(t.title) LIKE ")
            .push_bind(like_pattern(title));
    }
    if let Some(assignee_id) = filter.assignee_id {
        query.push(" AND t.assignee_id = ").push_bind(assignee_id);
    }
    if let Some(slug) = filter.status_slug() {
        query.push(" AND ts.slug = ").push_bind(slug.to_string());
    }
    if let Some(label_id) = filter.label_id {
        query
            .push(" AND EXISTS (SELECT 1 FROM task_labels f WHERE f.task_id = t.id AND f.label_id = ")
            .push_bind(label_id)
            .push(")");
    }

    query.push(TASK_GROUP);
    query
}

/// Lowercased `%needle%` pattern with LIKE wildcards escaped
pub fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Sorted, duplicate-free ids
fn normalize_ids(mut ids: Vec<Id>) -> Vec<Id> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

async fn resolve_status(conn: &mut PgConnection, slug: &str) -> AppResult<Id> {
    sqlx::query_scalar::<_, Id>("SELECT id FROM task_statuses WHERE slug = $1")
        .bind(slug)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("TaskStatus with slug {}", slug)))
}

async fn ensure_user_exists(conn: &mut PgConnection, user_id: Id) -> AppResult<()> {
    let found = sqlx::query_scalar::<_, Id>("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("User with id {}", user_id))),
    }
}

async fn ensure_labels_exist(conn: &mut PgConnection, label_ids: &[Id]) -> AppResult<()> {
    if label_ids.is_empty() {
        return Ok(());
    }

    let found = sqlx::query_scalar::<_, Id>("SELECT id FROM labels WHERE id = ANY($1)")
        .bind(label_ids)
        .fetch_all(&mut *conn)
        .await?;

    match label_ids.iter().find(|id| !found.contains(id)) {
        Some(missing) => Err(AppError::NotFound(format!("Label with id {}", missing))),
        None => Ok(()),
    }
}

async fn link_labels(conn: &mut PgConnection, task_id: Id, label_ids: &[Id]) -> AppResult<()> {
    if label_ids.is_empty() {
        return Ok(());
    }

    sqlx::query("INSERT INTO task_labels (task_id, label_id) SELECT $1, UNNEST($2::BIGINT[])")
        .bind(task_id)
        .bind(label_ids)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
