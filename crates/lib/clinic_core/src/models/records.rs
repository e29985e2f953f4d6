//! Clinic record models and their create/update payloads.
//!
//! Stored rows derive `FromRow`; the `*Create`/`*Update` payloads are the
//! deserialization boundary for record routes. Update payloads are fully
//! optional — only provided fields change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Patient {
    pub id: Uuid,
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientCreate {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Staff {
    pub id: Uuid,
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub specialization: Option<String>,
    pub contact_number: String,
    pub email: String,
    pub hire_date: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffCreate {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub specialization: Option<String>,
    pub contact_number: String,
    pub email: String,
    pub hire_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub specialization: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<String>,
}

/// Appointment status: Scheduled, Completed, Cancelled or No-Show.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    /// ISO-8601 instant; stored as text and compared lexicographically.
    pub appointment_date: String,
    pub status: String,
    pub reason_for_visit: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentCreate {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: String,
    pub reason_for_visit: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentUpdate {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub appointment_date: Option<String>,
    pub status: Option<String>,
    pub reason_for_visit: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub record_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub visit_date: String,
    pub diagnosis: String,
    pub treatment: String,
    pub lab_results: Option<String>,
    pub follow_up_required: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MedicalRecordCreate {
    pub patient_id: String,
    pub doctor_id: String,
    pub visit_date: String,
    pub diagnosis: String,
    pub treatment: String,
    pub lab_results: Option<String>,
    #[serde(default)]
    pub follow_up_required: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicalRecordUpdate {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub visit_date: Option<String>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub lab_results: Option<String>,
    pub follow_up_required: Option<bool>,
}

/// Payment method: Cash, Card or Online.
/// Payment status: Pending, Paid, Partial or Cancelled.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Billing {
    pub id: Uuid,
    pub bill_id: String,
    pub patient_id: String,
    pub appointment_id: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub billing_date: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillingCreate {
    pub patient_id: String,
    pub appointment_id: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub payment_method: String,
    pub billing_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingUpdate {
    pub patient_id: Option<String>,
    pub appointment_id: Option<String>,
    pub total_amount: Option<f64>,
    pub paid_amount: Option<f64>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub billing_date: Option<String>,
}
