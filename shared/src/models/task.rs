//! Task models and list filters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{double_option, Id};

/// A task as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Id,
    pub index: Option<i32>,
    pub created_at: NaiveDate,
    #[serde(rename = "assignee_id")]
    pub assignee_id: Option<Id>,
    pub title: String,
    pub content: Option<String>,
    /// Slug of the task's status
    pub status: String,
    /// Ids of attached labels, ascending
    pub task_label_ids: Vec<Id>,
}

/// Request body for creating a task
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    pub index: i32,

    #[serde(alias = "assigneeId")]
    pub assignee_id: Option<Id>,

    #[validate(length(min = 1), custom = "crate::validation::validate_not_blank")]
    pub title: String,

    pub content: Option<String>,

    #[validate(length(min = 1), custom = "crate::validation::validate_not_blank")]
    pub status: String,

    #[serde(default, rename = "taskLabelIds", alias = "labelIds")]
    pub task_label_ids: Option<Vec<Id>>,
}

/// Request body for updating a task
///
/// `assignee_id` and `content` separate "not sent" (`None`) from "sent as
/// null" (`Some(None)`), so a client can clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    pub index: Option<i32>,

    #[serde(default, alias = "assigneeId", deserialize_with = "double_option")]
    pub assignee_id: Option<Option<Id>>,

    #[validate(length(min = 1), custom = "crate::validation::validate_not_blank")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,

    #[validate(length(min = 1), custom = "crate::validation::validate_not_blank")]
    pub status: Option<String>,

    #[serde(default, rename = "taskLabelIds", alias = "labelIds")]
    pub task_label_ids: Option<Vec<Id>>,
}

/// Query parameters accepted by the task list endpoint; all are ANDed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Case-insensitive substring of the title
    pub title_cont: Option<String>,
    pub assignee_id: Option<Id>,
    /// Status slug
    pub status: Option<String>,
    pub label_id: Option<Id>,
}

impl TaskFilter {
    /// Title substring to match; an empty string counts as absent
    pub fn title_needle(&self) -> Option<&str> {
        self.title_cont.as_deref().filter(|t| !t.is_empty())
    }

    /// Status slug to match; an empty string counts as absent
    pub fn status_slug(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}
