//! Task status handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::extract::{Path, ValidatedJson};
use crate::handlers::{list_response, ListResponse};
use crate::models::{CreateTaskStatusRequest, TaskStatusResponse, UpdateTaskStatusRequest};
use crate::services::TaskStatusService;
use crate::AppState;
use shared::Id;

/// Get all task statuses
pub async fn list_task_statuses(
    State(state): State<AppState>,
) -> AppResult<ListResponse<TaskStatusResponse>> {
    let statuses = TaskStatusService::new(state.db.clone()).list().await?;
    Ok(list_response(statuses))
}

/// Get a specific task status
pub async fn get_task_status(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<TaskStatusResponse>> {
    let status = TaskStatusService::new(state.db.clone()).get(id).await?;
    Ok(Json(status))
}

/// Create a task status
pub async fn create_task_status(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTaskStatusRequest>,
) -> AppResult<(StatusCode, Json<TaskStatusResponse>)> {
    let status = TaskStatusService::new(state.db.clone()).create(input).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// Rename a task status or change its slug
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    ValidatedJson(input): ValidatedJson<UpdateTaskStatusRequest>,
) -> AppResult<Json<TaskStatusResponse>> {
    let status = TaskStatusService::new(state.db.clone())
        .update(id, input)
        .await?;
    Ok(Json(status))
}

/// Delete a task status that no task uses
pub async fn delete_task_status(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<StatusCode> {
    TaskStatusService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
