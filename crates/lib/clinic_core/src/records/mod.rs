//! Clinic record operations.
//!
//! One module per collection, each a thin set of queries over the shared
//! pool, plus the dashboard aggregation.

pub mod appointments;
pub mod billing;
pub mod dashboard;
pub mod medical_records;
pub mod patients;
pub mod staff;

use thiserror::Error;

/// Record operation errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Lookup by business key matched nothing. Carries the display name of
    /// the record type ("Patient", "Staff member", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
