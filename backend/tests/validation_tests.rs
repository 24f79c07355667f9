//! Tests for request validation, slugs and task list filters

use proptest::prelude::*;
use shared::{
    normalize_email, validate_slug, CreateLabelRequest, CreateTaskStatusRequest,
    CreateUserRequest, TaskFilter,
};
use task_manager::services::task::{build_list_query, like_pattern};
use validator::Validate;

// =============================================================================
// Request bodies
// =============================================================================

mod request_bodies {
    use super::*;

    #[test]
    fn seed_statuses_are_valid_requests() {
        for (slug, name) in shared::default_task_statuses() {
            let request = CreateTaskStatusRequest {
                name: name.to_string(),
                slug: slug.to_string(),
            };
            assert!(request.validate().is_ok(), "{}", slug);
        }
    }

    #[test]
    fn seed_labels_are_valid_requests() {
        for name in shared::default_labels() {
            let request = CreateLabelRequest {
                name: name.to_string(),
            };
            assert!(request.validate().is_ok(), "{}", name);
        }
    }

    #[test]
    fn label_name_too_short() {
        let request = CreateLabelRequest {
            name: "ab".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn user_names_are_optional() {
        let request = CreateUserRequest {
            email: "jack@example.com".to_string(),
            first_name: None,
            last_name: None,
            password: "abc".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}

// =============================================================================
// Task list filters
// =============================================================================

mod task_filters {
    use super::*;

    #[test]
    fn empty_filter_has_no_conditions() {
        let sql = build_list_query(&TaskFilter::default()).sql().to_string();
        assert!(!sql.contains('$'));
        assert!(sql.ends_with("ORDER BY t.id"));
    }

    #[test]
    fn blank_text_filters_are_ignored() {
        let filter = TaskFilter {
            title_cont: Some(String::new()),
            status: Some(String::new()),
            ..Default::default()
        };
        let sql = build_list_query(&filter).sql().to_string();
        assert!(!sql.contains('$'));
    }

    #[test]
    fn all_filters_bind_in_order() {
        let filter = TaskFilter {
            title_cont: Some("login".to_string()),
            assignee_id: Some(3),
            status: Some("draft".to_string()),
            label_id: Some(9),
        };
        let sql = build_list_query(&filter).sql().to_string();

        assert!(sql.contains("LOWER(t.title) LIKE $1"));
        assert!(sql.contains("t.assignee_id = $2"));
        assert!(sql.contains("ts.slug = $3"));
        assert!(sql.contains("f.label_id = $4"));
    }

    #[test]
    fn query_string_uses_camel_case_names() {
        let filter: TaskFilter =
            serde_json::from_value(serde_json::json!({ "titleCont": "bug", "labelId": 2 }))
                .unwrap();
        assert_eq!(filter.title_cont.as_deref(), Some("bug"));
        assert_eq!(filter.label_id, Some(2));
        assert!(filter.assignee_id.is_none());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("to_do"), "%to\\_do%");
        assert_eq!(like_pattern("C:\\"), "%c:\\\\%");
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    /// Lowercase letters, digits and underscores always form a valid slug
    #[test]
    fn prop_valid_slug_accepted(slug in "[a-z0-9_]{1,40}") {
        prop_assert!(validate_slug(&slug).is_ok());
    }

    /// Any uppercase letter or dash makes a slug invalid
    #[test]
    fn prop_slug_with_forbidden_char_rejected(
        prefix in "[a-z]{0,10}",
        bad in "[A-Z\\- ]",
        suffix in "[a-z]{0,10}",
    ) {
        let slug = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(validate_slug(&slug).is_err());
    }

    /// Normalizing an email twice changes nothing
    #[test]
    fn prop_normalize_email_idempotent(email in "[ ]{0,3}[A-Za-z]{3,10}@[A-Za-z]{3,8}\\.com[ ]{0,3}") {
        let once = normalize_email(&email);
        prop_assert_eq!(normalize_email(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
    }

    /// Plain alphanumeric needles are only lowercased and wrapped
    #[test]
    fn prop_like_pattern_plain_text(needle in "[A-Za-z0-9 ]{1,30}") {
        prop_assert_eq!(like_pattern(&needle), format!("%{}%", needle.to_lowercase()));
    }

    /// Every wildcard in the needle comes out escaped
    #[test]
    fn prop_like_pattern_escapes_all_wildcards(needle in "[a-z%_]{1,30}") {
        let pattern = like_pattern(&needle);
        let inner = &pattern[1..pattern.len() - 1];
        let wildcards = needle.chars().filter(|c| *c == '%' || *c == '_').count();
        prop_assert_eq!(inner.matches('\\').count(), wildcards);
        prop_assert_eq!(inner.len(), needle.len() + wildcards);
    }
}
