//! User management handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::extract::{Path, ValidatedJson};
use crate::handlers::{list_response, ListResponse};
use crate::middleware::CurrentUser;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::services::UserService;
use crate::AppState;
use shared::Id;

/// Get all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<ListResponse<UserResponse>> {
    let users = UserService::new(state.db.clone()).list().await?;
    Ok(list_response(users))
}

/// Get a specific user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::new(state.db.clone()).get(id).await?;
    Ok(Json(user))
}

/// Register a new user (public)
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::new(state.db.clone()).create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the current user's own account
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Id>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let updated = UserService::new(state.db.clone())
        .update(user.user_id, id, input)
        .await?;
    Ok(Json(updated))
}

/// Delete the current user's own account
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    UserService::new(state.db.clone())
        .delete(user.user_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
