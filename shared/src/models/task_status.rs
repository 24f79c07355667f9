//! Task status models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Id;

/// A workflow status a task can be in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusResponse {
    pub id: Id,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskStatusRequest {
    #[validate(length(min = 1, max = 255), custom = "crate::validation::validate_not_blank")]
    pub name: String,

    #[validate(length(max = 255), custom = "crate::validation::validate_slug")]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTaskStatusRequest {
    #[validate(length(min = 1, max = 255), custom = "crate::validation::validate_not_blank")]
    pub name: Option<String>,

    #[validate(length(max = 255), custom = "crate::validation::validate_slug")]
    pub slug: Option<String>,
}

/// Statuses every fresh installation starts with, as `(slug, name)` pairs
pub fn default_task_statuses() -> Vec<(&'static str, &'static str)> {
    vec![
        ("draft", "Draft"),
        ("to_review", "To review"),
        ("to_be_fixed", "To be fixed"),
        ("to_publish", "To publish"),
        ("published", "Published"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_statuses_have_valid_unique_slugs() {
        let statuses = default_task_statuses();
        assert_eq!(statuses.len(), 5);

        let mut slugs: Vec<_> = statuses.iter().map(|(slug, _)| *slug).collect();
        for slug in &slugs {
            assert!(crate::validation::validate_slug(slug).is_ok(), "{slug}");
        }
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 5);
    }

    #[test]
    fn test_create_request_validation() {
        let ok = CreateTaskStatusRequest {
            name: "In progress".to_string(),
            slug: "in_progress".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_slug = CreateTaskStatusRequest {
            name: "In progress".to_string(),
            slug: "In Progress".to_string(),
        };
        assert!(bad_slug.validate().is_err());

        let blank_name = CreateTaskStatusRequest {
            name: " ".to_string(),
            slug: "in_progress".to_string(),
        };
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_name_and_slug_longer_than_column_rejected() {
        let long_name = CreateTaskStatusRequest {
            name: "x".repeat(300),
            slug: "long".to_string(),
        };
        let errors = long_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let long_slug = UpdateTaskStatusRequest {
            slug: Some("x".repeat(256)),
            ..Default::default()
        };
        let errors = long_slug.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("slug"));
    }
}
