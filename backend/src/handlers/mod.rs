//! HTTP handlers

use axum::{http::HeaderName, Json};

pub mod auth;
pub mod health;
pub mod label;
pub mod task;
pub mod task_status;
pub mod user;

pub use auth::login;
pub use health::{health_check, root};
pub use label::{create_label, delete_label, get_label, list_labels, update_label};
pub use task::{create_task, delete_task, get_task, list_tasks, update_task};
pub use task_status::{
    create_task_status, delete_task_status, get_task_status, list_task_statuses,
    update_task_status,
};
pub use user::{create_user, delete_user, get_user, list_users, update_user};

/// Header carrying the number of items in a list response
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// List response with its `X-Total-Count` header
pub type ListResponse<T> = ([(HeaderName, String); 1], Json<Vec<T>>);

pub(crate) fn list_response<T>(items: Vec<T>) -> ListResponse<T> {
    ([(X_TOTAL_COUNT, items.len().to_string())], Json(items))
}
