//! Appointment record queries.

use sqlx::PgPool;

use super::RecordError;
use crate::ids;
use crate::models::records::{Appointment, AppointmentCreate, AppointmentUpdate};

const NOT_FOUND: &str = "Appointment";

const COLUMNS: &str = "id, appointment_id, patient_id, doctor_id, appointment_date, \
                       status, reason_for_visit, notes, created_at";

/// Insert a new appointment, generating its `APT_` business key.
/// Status starts at the column default, `Scheduled`.
pub async fn create(pool: &PgPool, payload: AppointmentCreate) -> Result<Appointment, RecordError> {
    let appointment = sqlx::query_as::<_, Appointment>(&format!(
        "INSERT INTO appointments (appointment_id, patient_id, doctor_id, appointment_date, \
                                   reason_for_visit, notes) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {COLUMNS}"
    ))
    .bind(ids::record_id("APT"))
    .bind(&payload.patient_id)
    .bind(&payload.doctor_id)
    .bind(&payload.appointment_date)
    .bind(&payload.reason_for_visit)
    .bind(&payload.notes)
    .fetch_one(pool)
    .await?;
    Ok(appointment)
}

/// Fetch an appointment by business key.
pub async fn get(pool: &PgPool, appointment_id: &str) -> Result<Appointment, RecordError> {
    sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {COLUMNS} FROM appointments WHERE appointment_id = $1"
    ))
    .bind(appointment_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// List all appointments.
pub async fn list(pool: &PgPool) -> Result<Vec<Appointment>, RecordError> {
    let appointments =
        sqlx::query_as::<_, Appointment>(&format!("SELECT {COLUMNS} FROM appointments"))
            .fetch_all(pool)
            .await?;
    Ok(appointments)
}

/// Apply a partial update; absent fields keep their stored value.
pub async fn update(
    pool: &PgPool,
    appointment_id: &str,
    changes: AppointmentUpdate,
) -> Result<Appointment, RecordError> {
    sqlx::query_as::<_, Appointment>(&format!(
        "UPDATE appointments SET \
             patient_id = COALESCE($2, patient_id), \
             doctor_id = COALESCE($3, doctor_id), \
             appointment_date = COALESCE($4, appointment_date), \
             status = COALESCE($5, status), \
             reason_for_visit = COALESCE($6, reason_for_visit), \
             notes = COALESCE($7, notes) \
         WHERE appointment_id = $1 \
         RETURNING {COLUMNS}"
    ))
    .bind(appointment_id)
    .bind(changes.patient_id)
    .bind(changes.doctor_id)
    .bind(changes.appointment_date)
    .bind(changes.status)
    .bind(changes.reason_for_visit)
    .bind(changes.notes)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// Delete an appointment by business key.
pub async fn delete(pool: &PgPool, appointment_id: &str) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM appointments WHERE appointment_id = $1")
        .bind(appointment_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound(NOT_FOUND));
    }
    Ok(())
}
