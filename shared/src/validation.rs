//! Validation utilities for the Task Manager service
//!
//! Field-level rules live on the request types as `validator` attributes; the
//! functions here are the custom rules those attributes point at.

use validator::ValidationError;

/// Reject strings that are empty or contain only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Validate a task status slug: lowercase ASCII letters, digits and `_`
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        let mut err = ValidationError::new("slug");
        err.message = Some("slug must not be empty".into());
        return Err(err);
    }
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        let mut err = ValidationError::new("slug");
        err.message =
            Some("slug may contain only lowercase letters, digits and underscores".into());
        return Err(err);
    }
    Ok(())
}

/// Canonical form of an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(validate_slug("draft").is_ok());
        assert!(validate_slug("to_be_fixed").is_ok());
        assert!(validate_slug("v2").is_ok());
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Draft").is_err()); // Uppercase
        assert!(validate_slug("to-review").is_err()); // Dash
        assert!(validate_slug("to review").is_err()); // Space
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("x").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  John.Doe@Example.COM "), "john.doe@example.com");
    }
}
