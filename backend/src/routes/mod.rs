//! Route definitions for the Task Manager service

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .route("/login", post(handlers::login))
        // Account registration is public, everything else about users is protected
        .nest("/users", user_routes(state.clone()))
        // Protected routes - task statuses
        .nest("/task_statuses", task_status_routes(state.clone()))
        // Protected routes - labels
        .nest("/labels", label_routes(state.clone()))
        // Protected routes - tasks
        .nest("/tasks", task_routes(state))
}

/// User routes
fn user_routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/", post(handlers::create_user));

    let protected = Router::new()
        .route("/", get(handlers::list_users))
        .route(
            "/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// Task status routes (protected)
fn task_status_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_task_statuses).post(handlers::create_task_status),
        )
        .route(
            "/:id",
            get(handlers::get_task_status)
                .put(handlers::update_task_status)
                .delete(handlers::delete_task_status),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Label routes (protected)
fn label_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_labels).post(handlers::create_label))
        .route(
            "/:id",
            get(handlers::get_label)
                .put(handlers::update_label)
                .delete(handlers::delete_label),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Task routes (protected)
fn task_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
