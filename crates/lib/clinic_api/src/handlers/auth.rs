//! Authentication request handlers.

use axum::Json;
use axum::extract::State;

use clinic_core::models::auth::User;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::models::{ApiResponse, LoginRequest, RegisterRequest, TokenData};
use crate::services::auth;

/// `POST /api/auth/login` — authenticate with email + password.
///
/// Unknown email and wrong password produce the identical 401.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<TokenData>>> {
    let user = auth::authenticate(&state.pool, &body.email, &body.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Incorrect email or password".into()))?;

    let token = auth::issue_token(&user, None, &state.config.token)?;

    Ok(Json(ApiResponse::ok(
        "Login successful",
        TokenData::bearer(token),
    )))
}

/// `POST /api/auth/register` — create a new identity.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = auth::register(
        &state.pool,
        &body.user_name,
        &body.email,
        &body.phone,
        &body.password,
    )
    .await?;

    Ok(Json(ApiResponse::ok("User registered successfully", user)))
}

/// `GET /api/auth/me` — current identity. Requires authentication.
pub async fn me_handler(
    axum::Extension(user): axum::Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    Ok(Json(ApiResponse::ok(
        "User info retrieved successfully",
        user.0,
    )))
}
