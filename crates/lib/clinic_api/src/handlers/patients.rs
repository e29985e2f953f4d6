//! Patient record request handlers.

use axum::Json;
use axum::extract::{Path, State};

use clinic_core::models::records::{Patient, PatientCreate, PatientUpdate};
use clinic_core::records::patients;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ApiResponse, PatientList};

/// `POST /api/patients` — create a patient record.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<PatientCreate>,
) -> AppResult<Json<ApiResponse<Patient>>> {
    let patient = patients::create(&state.pool, body).await?;
    Ok(Json(ApiResponse::ok("Patient created successfully", patient)))
}

/// `GET /api/patients/{patient_id}` — fetch a patient record.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> AppResult<Json<ApiResponse<Patient>>> {
    let patient = patients::get(&state.pool, &patient_id).await?;
    Ok(Json(ApiResponse::ok(
        "Patient retrieved successfully",
        patient,
    )))
}

/// `PUT /api/patients/{patient_id}` — partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    Json(body): Json<PatientUpdate>,
) -> AppResult<Json<ApiResponse<Patient>>> {
    let patient = patients::update(&state.pool, &patient_id, body).await?;
    Ok(Json(ApiResponse::ok("Patient updated successfully", patient)))
}

/// `DELETE /api/patients/{patient_id}` — remove a patient record.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    patients::delete(&state.pool, &patient_id).await?;
    Ok(Json(ApiResponse::ok_empty("Patient deleted successfully")))
}

/// `GET /api/patients` — list all patient records.
pub async fn list_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PatientList>>> {
    let patients = patients::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Patients retrieved successfully",
        PatientList { patients },
    )))
}
