//! Task handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::extract::{Path, Query, ValidatedJson};
use crate::handlers::{list_response, ListResponse};
use crate::models::{CreateTaskRequest, TaskFilter, TaskResponse, UpdateTaskRequest};
use crate::services::TaskService;
use crate::AppState;
use shared::Id;

/// List tasks, optionally filtered by `titleCont`, `assigneeId`, `status`
/// and `labelId`
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<ListResponse<TaskResponse>> {
    let tasks = TaskService::new(state.db.clone()).list(&filter).await?;
    Ok(list_response(tasks))
}

/// Get a specific task
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<TaskResponse>> {
    let task = TaskService::new(state.db.clone()).get(id).await?;
    Ok(Json(task))
}

/// Create a task
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<TaskResponse>)> {
    let task = TaskService::new(state.db.clone()).create(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task; absent fields keep their value
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    ValidatedJson(input): ValidatedJson<UpdateTaskRequest>,
) -> AppResult<Json<TaskResponse>> {
    let task = TaskService::new(state.db.clone()).update(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    TaskService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
