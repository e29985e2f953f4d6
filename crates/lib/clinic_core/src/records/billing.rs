//! Billing record queries.

use sqlx::PgPool;

use super::RecordError;
use crate::ids;
use crate::models::records::{Billing, BillingCreate, BillingUpdate};

const NOT_FOUND: &str = "Billing record";

const COLUMNS: &str = "id, bill_id, patient_id, appointment_id, total_amount, paid_amount, \
                       payment_method, payment_status, billing_date, created_at";

/// Insert a new billing record, generating its `BIL_` business key.
/// Payment status starts at the column default, `Pending`.
pub async fn create(pool: &PgPool, payload: BillingCreate) -> Result<Billing, RecordError> {
    let bill = sqlx::query_as::<_, Billing>(&format!(
        "INSERT INTO billing (bill_id, patient_id, appointment_id, total_amount, paid_amount, \
                              payment_method, billing_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {COLUMNS}"
    ))
    .bind(ids::record_id("BIL"))
    .bind(&payload.patient_id)
    .bind(&payload.appointment_id)
    .bind(payload.total_amount)
    .bind(payload.paid_amount)
    .bind(&payload.payment_method)
    .bind(&payload.billing_date)
    .fetch_one(pool)
    .await?;
    Ok(bill)
}

/// Fetch a billing record by business key.
pub async fn get(pool: &PgPool, bill_id: &str) -> Result<Billing, RecordError> {
    sqlx::query_as::<_, Billing>(&format!("SELECT {COLUMNS} FROM billing WHERE bill_id = $1"))
        .bind(bill_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// List all billing records.
pub async fn list(pool: &PgPool) -> Result<Vec<Billing>, RecordError> {
    let bills = sqlx::query_as::<_, Billing>(&format!("SELECT {COLUMNS} FROM billing"))
        .fetch_all(pool)
        .await?;
    Ok(bills)
}

/// Apply a partial update; absent fields keep their stored value.
pub async fn update(
    pool: &PgPool,
    bill_id: &str,
    changes: BillingUpdate,
) -> Result<Billing, RecordError> {
    sqlx::query_as::<_, Billing>(&format!(
        "UPDATE billing SET \
             patient_id = COALESCE($2, patient_id), \
             appointment_id = COALESCE($3, appointment_id), \
             total_amount = COALESCE($4, total_amount), \
             paid_amount = COALESCE($5, paid_amount), \
             payment_method = COALESCE($6, payment_method), \
             payment_status = COALESCE($7, payment_status), \
             billing_date = COALESCE($8, billing_date) \
         WHERE bill_id = $1 \
         RETURNING {COLUMNS}"
    ))
    .bind(bill_id)
    .bind(changes.patient_id)
    .bind(changes.appointment_id)
    .bind(changes.total_amount)
    .bind(changes.paid_amount)
    .bind(changes.payment_method)
    .bind(changes.payment_status)
    .bind(changes.billing_date)
    .fetch_optional(pool)
    .await?
    .ok_or(RecordError::NotFound(NOT_FOUND))
}

/// Delete a billing record by business key.
pub async fn delete(pool: &PgPool, bill_id: &str) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM billing WHERE bill_id = $1")
        .bind(bill_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound(NOT_FOUND));
    }
    Ok(())
}
