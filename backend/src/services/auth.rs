//! Authentication service for login, password hashing and token management

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::services::user::UserService;
use shared::{normalize_email, Id};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt: JwtConfig,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account email
    pub sub: String,
    /// Account id
    pub uid: Id,
    pub exp: i64,
    pub iat: i64,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, jwt: &JwtConfig) -> Self {
        Self {
            db,
            jwt: jwt.clone(),
        }
    }

    /// Authenticate user with email and password, returning a signed token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let email = normalize_email(email);

        let credentials = UserService::new(self.db.clone())
            .find_credentials(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash)? {
            tracing::debug!(email = %email, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = credentials.id, "User logged in");

        issue_token(&self.jwt, credentials.id, &credentials.email)
    }
}

/// Sign an access token for the given account
pub fn issue_token(jwt: &JwtConfig, user_id: Id, email: &str) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        uid: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(jwt.expiration_secs)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

/// Validate an access token and return its claims
pub fn decode_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token has expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })
}

/// Hash a password for storage
pub fn hash_password(password: &str) -> AppResult<String> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Check a password against a stored hash
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    Ok(verify(password, password_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration_secs: 3600,
        }
    }

    #[test]
    fn test_issued_token_decodes_with_same_secret() {
        let config = jwt_config();
        let token = issue_token(&config, 42, "john@example.com").unwrap();

        let claims = decode_token(&token, &config.secret).unwrap();
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.sub, "john@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_rejected_with_other_secret() {
        let token = issue_token(&jwt_config(), 1, "john@example.com").unwrap();
        assert!(matches!(
            decode_token(&token, "another-secret"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Far enough in the past to clear the default leeway
        let config = JwtConfig {
            secret: "test-secret".to_string(),
            expiration_secs: -3600,
        };
        let token = issue_token(&config, 1, "john@example.com").unwrap();

        match decode_token(&token, &config.secret) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token has expired"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(decode_token("not.a.token", "test-secret").is_err());
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hashed = hash_password("qwerty").unwrap();
        assert_ne!(hashed, "qwerty");
        assert!(verify_password("qwerty", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }
}
