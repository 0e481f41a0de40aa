//! Handler for the admin login endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use nexora_core::error::CoreError;
use nexora_core::validation::require_non_empty;

use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::ROLE_ADMIN;
use crate::state::AppState;

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminInfo,
}

/// Public admin info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub username: String,
    pub role: String,
}

/// POST /api/admin/login
///
/// Exchange the fixed admin credential pair for a session token. Credentials
/// are checked by exact match; no token is issued on mismatch.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    require_non_empty("username", &input.username)?;
    require_non_empty("password", &input.password)?;

    let admin = &state.config.admin;
    if input.username != admin.username || input.password != admin.password {
        tracing::warn!(username = %input.username, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let token = generate_token(&admin.username, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        user: AdminInfo {
            username: admin.username.clone(),
            role: ROLE_ADMIN.to_string(),
        },
    }))
}
