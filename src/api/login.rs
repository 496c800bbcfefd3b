//! Login endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiResult;
use crate::auth;
use crate::errors::AppError;
use crate::AppState;

/// Request body for the login check.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Confirmation body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

/// POST /api/login - Check credentials against the configured pair.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    if auth::verify_credentials(&state.config, &request.username, &request.password) {
        tracing::info!(username = %request.username, "login accepted");
        Ok(Json(LoginResponse {
            message: "Login successful",
        }))
    } else {
        tracing::warn!(username = %request.username, "login rejected");
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
