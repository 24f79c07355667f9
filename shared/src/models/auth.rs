//! Authentication models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// The account email
    #[validate(email, custom = "crate::validation::validate_not_blank")]
    pub username: String,

    #[validate(custom = "crate::validation::validate_not_blank")]
    pub password: String,
}
