//! Medical record request handlers.

use axum::Json;
use axum::extract::{Path, State};

use clinic_core::models::records::{MedicalRecord, MedicalRecordCreate, MedicalRecordUpdate};
use clinic_core::records::medical_records;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ApiResponse, MedicalRecordList};

/// `POST /api/medical-records` — create a medical record.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<MedicalRecordCreate>,
) -> AppResult<Json<ApiResponse<MedicalRecord>>> {
    let record = medical_records::create(&state.pool, body).await?;
    Ok(Json(ApiResponse::ok(
        "Medical record created successfully",
        record,
    )))
}

/// `GET /api/medical-records/{record_id}` — fetch a medical record.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> AppResult<Json<ApiResponse<MedicalRecord>>> {
    let record = medical_records::get(&state.pool, &record_id).await?;
    Ok(Json(ApiResponse::ok(
        "Medical record retrieved successfully",
        record,
    )))
}

/// `PUT /api/medical-records/{record_id}` — partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    Json(body): Json<MedicalRecordUpdate>,
) -> AppResult<Json<ApiResponse<MedicalRecord>>> {
    let record = medical_records::update(&state.pool, &record_id, body).await?;
    Ok(Json(ApiResponse::ok(
        "Medical record updated successfully",
        record,
    )))
}

/// `DELETE /api/medical-records/{record_id}` — remove a medical record.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    medical_records::delete(&state.pool, &record_id).await?;
    Ok(Json(ApiResponse::ok_empty(
        "Medical record deleted successfully",
    )))
}

/// `GET /api/medical-records` — list all medical records.
pub async fn list_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MedicalRecordList>>> {
    let records = medical_records::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Medical records retrieved successfully",
        MedicalRecordList { records },
    )))
}
