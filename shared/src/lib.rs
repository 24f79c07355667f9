//! Shared types and models for the Task Manager service
//!
//! This crate contains the request/response shapes and validation rules used
//! by the backend and by its integration tests.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
