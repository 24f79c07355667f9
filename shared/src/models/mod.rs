//! Domain models for the Task Manager service

mod auth;
mod label;
mod task;
mod task_status;
mod user;

pub use auth::*;
pub use label::*;
pub use task::*;
pub use task_status::*;
pub use user::*;
