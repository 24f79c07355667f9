//! Label models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Id;

/// A label as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    pub id: Id,
    pub name: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLabelRequest {
    #[validate(length(min = 3, max = 1000), custom = "crate::validation::validate_not_blank")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLabelRequest {
    #[validate(length(min = 3, max = 1000), custom = "crate::validation::validate_not_blank")]
    pub name: Option<String>,
}

/// Labels every fresh installation starts with
pub fn default_labels() -> Vec<&'static str> {
    vec!["bug", "feature", "enhancement", "documentation", "urgent"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_name_length_bounds() {
        let short = CreateLabelRequest { name: "ab".to_string() };
        assert!(short.validate().is_err());

        let min = CreateLabelRequest { name: "bug".to_string() };
        assert!(min.validate().is_ok());

        let max = CreateLabelRequest { name: "x".repeat(1000) };
        assert!(max.validate().is_ok());

        let long = CreateLabelRequest { name: "x".repeat(1001) };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_blank_label_name_rejected() {
        let blank = CreateLabelRequest { name: "    ".to_string() };
        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let blank_update = UpdateLabelRequest {
            name: Some(" \t  ".to_string()),
        };
        assert!(blank_update.validate().is_err());
    }

    #[test]
    fn test_default_labels_are_valid() {
        for name in default_labels() {
            let req = CreateLabelRequest { name: name.to_string() };
            assert!(req.validate().is_ok(), "{name}");
        }
    }
}
