//! Appointment record request handlers.

use axum::Json;
use axum::extract::{Path, State};

use clinic_core::models::records::{Appointment, AppointmentCreate, AppointmentUpdate};
use clinic_core::records::appointments;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ApiResponse, AppointmentList};

/// `POST /api/appointments` — create an appointment.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<AppointmentCreate>,
) -> AppResult<Json<ApiResponse<Appointment>>> {
    let appointment = appointments::create(&state.pool, body).await?;
    Ok(Json(ApiResponse::ok(
        "Appointment created successfully",
        appointment,
    )))
}

/// `GET /api/appointments/{appointment_id}` — fetch an appointment.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> AppResult<Json<ApiResponse<Appointment>>> {
    let appointment = appointments::get(&state.pool, &appointment_id).await?;
    Ok(Json(ApiResponse::ok(
        "Appointment retrieved successfully",
        appointment,
    )))
}

/// `PUT /api/appointments/{appointment_id}` — partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    Json(body): Json<AppointmentUpdate>,
) -> AppResult<Json<ApiResponse<Appointment>>> {
    let appointment = appointments::update(&state.pool, &appointment_id, body).await?;
    Ok(Json(ApiResponse::ok(
        "Appointment updated successfully",
        appointment,
    )))
}

/// `DELETE /api/appointments/{appointment_id}` — remove an appointment.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    appointments::delete(&state.pool, &appointment_id).await?;
    Ok(Json(ApiResponse::ok_empty(
        "Appointment deleted successfully",
    )))
}

/// `GET /api/appointments` — list all appointments.
pub async fn list_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AppointmentList>>> {
    let appointments = appointments::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Appointments retrieved successfully",
        AppointmentList { appointments },
    )))
}
