//! Staff record request handlers.

use axum::Json;
use axum::extract::{Path, State};

use clinic_core::models::records::{Staff, StaffCreate, StaffUpdate};
use clinic_core::records::staff;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ApiResponse, StaffList};

/// `POST /api/staff` — create a staff record.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<StaffCreate>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let member = staff::create(&state.pool, body).await?;
    Ok(Json(ApiResponse::ok(
        "Staff member created successfully",
        member,
    )))
}

/// `GET /api/staff/{staff_id}` — fetch a staff record.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let member = staff::get(&state.pool, &staff_id).await?;
    Ok(Json(ApiResponse::ok(
        "Staff member retrieved successfully",
        member,
    )))
}

/// `PUT /api/staff/{staff_id}` — partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    Json(body): Json<StaffUpdate>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let member = staff::update(&state.pool, &staff_id, body).await?;
    Ok(Json(ApiResponse::ok(
        "Staff member updated successfully",
        member,
    )))
}

/// `DELETE /api/staff/{staff_id}` — remove a staff record.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    staff::delete(&state.pool, &staff_id).await?;
    Ok(Json(ApiResponse::ok_empty(
        "Staff member deleted successfully",
    )))
}

/// `GET /api/staff` — list all staff records.
pub async fn list_handler(State(state): State<AppState>) -> AppResult<Json<ApiResponse<StaffList>>> {
    let staff = staff::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Staff members retrieved successfully",
        StaffList { staff },
    )))
}
