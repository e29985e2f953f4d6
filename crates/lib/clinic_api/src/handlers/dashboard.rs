//! Dashboard request handler.

use axum::Json;
use axum::extract::State;

use clinic_core::models::dashboard::DashboardData;
use clinic_core::records::dashboard;

use crate::AppState;
use crate::error::AppResult;
use crate::models::ApiResponse;

/// `GET /api/dashboard` — aggregated overview. Requires authentication.
pub async fn overview_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardData>>> {
    let data = dashboard::overview(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Dashboard data retrieved successfully",
        data,
    )))
}
