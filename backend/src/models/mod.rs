//! Database models for the Task Manager service
//!
//! Re-exports API models from the shared crate and adds the row types the
//! services read from Postgres, with their conversions into response DTOs.

use chrono::NaiveDate;

pub use shared::models::*;
use shared::Id;

/// Row of the `users` table without the password hash
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: Id,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDate,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
        }
    }
}

/// Login lookup result
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: Id,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskStatusRow {
    pub id: Id,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDate,
}

impl From<TaskStatusRow> for TaskStatusResponse {
    fn from(row: TaskStatusRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LabelRow {
    pub id: Id,
    pub name: String,
    pub created_at: NaiveDate,
}

impl From<LabelRow> for LabelResponse {
    fn from(row: LabelRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Task joined with its status slug and aggregated label ids
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRow {
    pub id: Id,
    pub index: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub status_slug: String,
    pub assignee_id: Option<Id>,
    pub label_ids: Vec<Id>,
    pub created_at: NaiveDate,
}

impl From<TaskRow> for TaskResponse {
    fn from(row: TaskRow) -> Self {
        let mut task_label_ids = row.label_ids;
        task_label_ids.sort_unstable();
        task_label_ids.dedup();

        Self {
            id: row.id,
            index: row.index,
            created_at: row.created_at,
            assignee_id: row.assignee_id,
            title: row.title,
            content: row.description,
            status: row.status_slug,
            task_label_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_row_maps_description_to_content_and_sorts_labels() {
        let row = TaskRow {
            id: 1,
            index: Some(5),
            title: "Write docs".to_string(),
            description: Some("Body".to_string()),
            status_slug: "to_review".to_string(),
            assignee_id: None,
            label_ids: vec![3, 1, 3],
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };

        let task = TaskResponse::from(row);
        assert_eq!(task.content.as_deref(), Some("Body"));
        assert_eq!(task.status, "to_review");
        assert_eq!(task.task_label_ids, vec![1, 3]);
    }
}
