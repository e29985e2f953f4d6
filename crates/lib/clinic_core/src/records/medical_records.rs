//! Medical record queries.

use sqlx::PgPool;

use super::RecordError;
use crate::ids;
use crate::models::records::{MedicalRecord, MedicalRecordCreate, MedicalRecordUpdate};

const NOT_FOUND: &str = "Medical record";

const COLUMNS: &str = "id, record_id, patient_id, doctor_id, visit_date, diagnosis, \
                       treatment, lab_results, follow_up_required, created_at";

/// Insert a new medical record, generating its `REC_` business key.
pub async fn create(
    pool: &PgPool,
    payload: MedicalRecordCreate,
) -> Result<MedicalRecord, RecordError> {
    let record = sqlx::query_as::<_, MedicalRecord>(&format!(
        "INSERT INTO medical_records (record_id, patient_id, doctor_id, visit_date, \
                                      diagnosis, treatment, lab_results, follow_up_required) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {COLUMNS}"
    ))
    .bind(ids::record_id("REC"))
    .bind(&payload.patient_id)
    .bind(&payload.doctor_id)
    .bind(&payload.visit_date)
    .bind(&payload.diagnosis)
    .bind(&payload.treatment)
    .bind(&payload.lab_results)
    .bind(payload.follow_up_required)
    .fetch_one(pool)
    .await?;
    Ok(record)
}

/// Fetch a medical record by business key.
pub async fn get(pool: &PgPool, record_id: &str) -> Result<MedicalRecord, RecordError> {
    sqlx::query_as::<_, MedicalRecord>(&format!(
        "SELECT {COLUMNS} FROM medical_records WHERE record_id = $1"
    ))
    .bind(record_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// List all medical records.
pub async fn list(pool: &PgPool) -> Result<Vec<MedicalRecord>, RecordError> {
    let records =
        sqlx::query_as::<_, MedicalRecord>(&format!("SELECT {COLUMNS} FROM medical_records"))
            .fetch_all(pool)
            .await?;
    Ok(records)
}

/// Apply a partial update; absent fields keep their stored value.
pub async fn update(
    pool: &PgPool,
    record_id: &str,
    changes: MedicalRecordUpdate,
) -> Result<MedicalRecord, RecordError> {
    sqlx::query_as::<_, MedicalRecord>(&format!(
        "UPDATE medical_records SET \
             patient_id = COALESCE($2, patient_id), \
             doctor_id = COALESCE($3, doctor_id), \
             visit_date = COALESCE($4, visit_date), \
             diagnosis = COALESCE($5, diagnosis), \
             treatment = COALESCE($6, treatment), \
             lab_results = COALESCE($7, lab_results), \
             follow_up_required = COALESCE($8, follow_up_required) \
         WHERE record_id = $1 \
         RETURNING {COLUMNS}"
    ))
    .bind(record_id)
    .bind(changes.patient_id)
    .bind(changes.doctor_id)
    .bind(changes.visit_date)
    .bind(changes.diagnosis)
    .bind(changes.treatment)
    .bind(changes.lab_results)
    .bind(changes.follow_up_required)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// Delete a medical record by business key.
pub async fn delete(pool: &PgPool, record_id: &str) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM medical_records WHERE record_id = $1")
        .bind(record_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound(NOT_FOUND));
    }
    Ok(())
}
