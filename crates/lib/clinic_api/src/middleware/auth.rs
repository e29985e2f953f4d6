//! Authentication middleware — Bearer extraction and identity resolution.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use clinic_core::models::auth::User;

use crate::AppState;
use crate::error::AppError;
use crate::services::auth;

/// The resolved identity, stored in request extensions for handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Axum middleware: extracts `Authorization: Bearer <token>`, resolves it to
/// a live identity, and injects [`CurrentUser`] into request extensions.
///
/// Every resolution failure — missing header, wrong scheme, bad token,
/// deleted account — produces the same 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(unauthenticated)?;

    let token = header.strip_prefix("Bearer ").ok_or_else(unauthenticated)?;

    let user = auth::resolve_current_user(&state.pool, token, &state.config.token)
        .await?
        .ok_or_else(unauthenticated)?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

fn unauthenticated() -> AppError {
    AppError::Unauthorized("Could not validate credentials".into())
}
