//! Business logic services for the Task Manager service

pub mod auth;
pub mod bootstrap;
pub mod label;
pub mod task;
pub mod task_status;
pub mod user;

pub use auth::AuthService;
pub use bootstrap::BootstrapService;
pub use label::LabelService;
pub use task::TaskService;
pub use task_status::TaskStatusService;
pub use user::UserService;
