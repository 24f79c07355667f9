//! Authentication handlers

use axum::extract::State;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::models::LoginRequest;
use crate::services::AuthService;
use crate::AppState;

/// Login endpoint handler; responds with the bearer token as plain text
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> AppResult<String> {
    let auth_service = AuthService::new(state.db.clone(), &state.config.jwt);
    auth_service.login(&body.username, &body.password).await
}
