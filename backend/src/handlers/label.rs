//! Label handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::extract::{Path, ValidatedJson};
use crate::handlers::{list_response, ListResponse};
use crate::models::{CreateLabelRequest, LabelResponse, UpdateLabelRequest};
use crate::services::LabelService;
use crate::AppState;
use shared::Id;

/// Get all labels
pub async fn list_labels(State(state): State<AppState>) -> AppResult<ListResponse<LabelResponse>> {
    let labels = LabelService::new(state.db.clone()).list().await?;
    Ok(list_response(labels))
}

/// Get a specific label
pub async fn get_label(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<LabelResponse>> {
    let label = LabelService::new(state.db.clone()).get(id).await?;
    Ok(Json(label))
}

/// Create a label
pub async fn create_label(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLabelRequest>,
) -> AppResult<(StatusCode, Json<LabelResponse>)> {
    let label = LabelService::new(state.db.clone()).create(input).await?;
    Ok((StatusCode::CREATED, Json(label)))
}

/// Rename a label
pub async fn update_label(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    ValidatedJson(input): ValidatedJson<UpdateLabelRequest>,
) -> AppResult<Json<LabelResponse>> {
    let label = LabelService::new(state.db.clone()).update(id, input).await?;
    Ok(Json(label))
}

/// Delete a label that no task carries
pub async fn delete_label(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    LabelService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
