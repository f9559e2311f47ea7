// ============================
// catalog-backend/src/handlers/auth.rs
// ============================
//! Registration and login endpoints.

use axum::{extract::State, http::StatusCode, Json};

use catalog_common::{AuthResponse, LoginRequest, RegisterRequest};

use crate::error::AppError;
use crate::validation;
use crate::AppState;

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validation::validate_register(&request, state.settings.password.min_length)?;
    let response = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validation::validate_login(&request)?;
    let response = state.auth.login(request).await?;
    Ok(Json(response))
}
