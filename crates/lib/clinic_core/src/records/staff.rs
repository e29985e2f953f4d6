//! Staff record queries.

use sqlx::PgPool;

use super::RecordError;
use crate::ids;
use crate::models::records::{Staff, StaffCreate, StaffUpdate};

const NOT_FOUND: &str = "Staff member";

const COLUMNS: &str = "id, staff_id, first_name, last_name, role, specialization, \
                       contact_number, email, hire_date, created_at";

/// Insert a new staff member, generating its `STF_` business key.
pub async fn create(pool: &PgPool, payload: StaffCreate) -> Result<Staff, RecordError> {
    let staff = sqlx::query_as::<_, Staff>(&format!(
        "INSERT INTO staff (staff_id, first_name, last_name, role, specialization, \
                            contact_number, email, hire_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {COLUMNS}"
    ))
    .bind(ids::record_id("STF"))
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.role)
    .bind(&payload.specialization)
    .bind(&payload.contact_number)
    .bind(&payload.email)
    .bind(&payload.hire_date)
    .fetch_one(pool)
    .await?;
    Ok(staff)
}

/// Fetch a staff member by business key.
pub async fn get(pool: &PgPool, staff_id: &str) -> Result<Staff, RecordError> {
    sqlx::query_as::<_, Staff>(&format!("SELECT {COLUMNS} FROM staff WHERE staff_id = $1"))
        .bind(staff_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// List all staff members.
pub async fn list(pool: &PgPool) -> Result<Vec<Staff>, RecordError> {
    let staff = sqlx::query_as::<_, Staff>(&format!("SELECT {COLUMNS} FROM staff"))
        .fetch_all(pool)
        .await?;
    Ok(staff)
}

/// Apply a partial update; absent fields keep their stored value.
///
/// `specialization` follows the same rule as every other field: an absent
/// value leaves it unchanged, so it cannot be cleared back to NULL here.
pub async fn update(
    pool: &PgPool,
    staff_id: &str,
    changes: StaffUpdate,
) -> Result<Staff, RecordError> {
    sqlx::query_as::<_, Staff>(&format!(
        "UPDATE staff SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             role = COALESCE($4, role), \
             specialization = COALESCE($5, specialization), \
             contact_number = COALESCE($6, contact_number), \
             email = COALESCE($7, email), \
             hire_date = COALESCE($8, hire_date) \
         WHERE staff_id = $1 \
         RETURNING {COLUMNS}"
    ))
    .bind(staff_id)
    .bind(changes.first_name)
    .bind(changes.last_name)
    .bind(changes.role)
    .bind(changes.specialization)
    .bind(changes.contact_number)
    .bind(changes.email)
    .bind(changes.hire_date)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// Delete a staff member by business key.
pub async fn delete(pool: &PgPool, staff_id: &str) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM staff WHERE staff_id = $1")
        .bind(staff_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound(NOT_FOUND));
    }
    Ok(())
}
