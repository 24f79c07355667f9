//! User account service

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{CreateUserRequest, UpdateUserRequest, UserCredentials, UserResponse, UserRow};
use crate::services::auth::hash_password;
use shared::{normalize_email, Id};

/// User service for account management
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

const USER_COLUMNS: &str = "id, email, first_name, last_name, created_at";

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all users
    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID
    pub async fn get(&self, id: Id) -> AppResult<UserResponse> {
        self.find(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User with id {}", id)))
    }

    /// Register a new user
    pub async fn create(&self, input: CreateUserRequest) -> AppResult<UserResponse> {
        let email = normalize_email(&input.email);
        let password_hash = hash_password(&input.password)?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (email, first_name, last_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&email)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&password_hash)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(user_id = row.id, "User created");

        Ok(row.into())
    }

    /// Update a user; only the account owner may do so
    pub async fn update(
        &self,
        actor_id: Id,
        id: Id,
        input: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        ensure_self(actor_id, id)?;

        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {}", id)))?;

        let email = input
            .email
            .as_deref()
            .map(normalize_email)
            .unwrap_or(existing.email);
        let first_name = input.first_name.or(existing.first_name);
        let last_name = input.last_name.or(existing.last_name);
        let password_hash = input
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET email = $1,
                first_name = $2,
                last_name = $3,
                password_hash = COALESCE($4, password_hash),
                updated_at = NOW()
            WHERE id = $5
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&email)
        .bind(&first_name)
        .bind(&last_name)
        .bind(&password_hash)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(user_id = id, password_changed = password_hash.is_some(), "User updated");

        Ok(row.into())
    }

    /// Delete a user; only the account owner may do so
    ///
    /// Fails with a data integrity error while tasks are still assigned.
    pub async fn delete(&self, actor_id: Id, id: Id) -> AppResult<()> {
        ensure_self(actor_id, id)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {}", id)));
        }

        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    /// Look up the stored credentials for a normalized email
    pub async fn find_credentials(&self, email: &str) -> AppResult<Option<UserCredentials>> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(credentials)
    }

    async fn find(&self, id: Id) -> AppResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}

/// Users may only modify their own account
pub fn ensure_self(actor_id: Id, target_id: Id) -> AppResult<()> {
    if actor_id == target_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only modify your own account".to_string(),
        ))
    }
}
