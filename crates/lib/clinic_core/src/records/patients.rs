//! Patient record queries.

use sqlx::PgPool;

use super::RecordError;
use crate::ids;
use crate::models::records::{Patient, PatientCreate, PatientUpdate};

const NOT_FOUND: &str = "Patient";

const COLUMNS: &str = "id, patient_id, first_name, last_name, date_of_birth, gender, \
                       contact_number, email, address, emergency_contact, created_at";

/// Insert a new patient, generating its `PAT_` business key.
pub async fn create(pool: &PgPool, payload: PatientCreate) -> Result<Patient, RecordError> {
    let patient = sqlx::query_as::<_, Patient>(&format!(
        "INSERT INTO patients (patient_id, first_name, last_name, date_of_birth, gender, \
                               contact_number, email, address, emergency_contact) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING {COLUMNS}"
    ))
    .bind(ids::record_id("PAT"))
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.date_of_birth)
    .bind(&payload.gender)
    .bind(&payload.contact_number)
    .bind(&payload.email)
    .bind(&payload.address)
    .bind(&payload.emergency_contact)
    .fetch_one(pool)
    .await?;
    Ok(patient)
}

/// Fetch a patient by business key.
pub async fn get(pool: &PgPool, patient_id: &str) -> Result<Patient, RecordError> {
    sqlx::query_as::<_, Patient>(&format!(
        "SELECT {COLUMNS} FROM patients WHERE patient_id = $1"
    ))
    .bind(patient_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// List all patients.
pub async fn list(pool: &PgPool) -> Result<Vec<Patient>, RecordError> {
    let patients = sqlx::query_as::<_, Patient>(&format!("SELECT {COLUMNS} FROM patients"))
        .fetch_all(pool)
        .await?;
    Ok(patients)
}

/// Apply a partial update; absent fields keep their stored value.
pub async fn update(
    pool: &PgPool,
    patient_id: &str,
    changes: PatientUpdate,
) -> Result<Patient, RecordError> {
    sqlx::query_as::<_, Patient>(&format!(
        "UPDATE patients SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             date_of_birth = COALESCE($4, date_of_birth), \
             gender = COALESCE($5, gender), \
             contact_number = COALESCE($6, contact_number), \
             email = COALESCE($7, email), \
             address = COALESCE($8, address), \
             emergency_contact = COALESCE($9, emergency_contact) \
         WHERE patient_id = $1 \
         RETURNING {COLUMNS}"
    ))
    .bind(patient_id)
    .bind(changes.first_name)
    .bind(changes.last_name)
    .bind(changes.date_of_birth)
    .bind(changes.gender)
    .bind(changes.contact_number)
    .bind(changes.email)
    .bind(changes.address)
    .bind(changes.emergency_contact)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// Delete a patient by business key.
pub async fn delete(pool: &PgPool, patient_id: &str) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM patients WHERE patient_id = $1")
        .bind(patient_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound(NOT_FOUND));
    }
    Ok(())
}
