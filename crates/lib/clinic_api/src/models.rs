//! API request/response types.
//!
//! Record payloads (`PatientCreate` and friends) live in
//! `clinic_core::models::records`; the types here are the HTTP-only shapes:
//! the uniform envelope, auth bodies, and list wrappers.

use serde::{Deserialize, Serialize};

use clinic_core::models::records::{Appointment, Billing, MedicalRecord, Patient, Staff};

/// The uniform response envelope every 2xx response uses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with `data: null`.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Error envelope produced by `AppError`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Issued bearer token, `token_type` always `"bearer"`.
#[derive(Debug, Serialize)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenData {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PatientList {
    pub patients: Vec<Patient>,
}

#[derive(Debug, Serialize)]
pub struct StaffList {
    pub staff: Vec<Staff>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentList {
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Serialize)]
pub struct MedicalRecordList {
    pub records: Vec<MedicalRecord>,
}

#[derive(Debug, Serialize)]
pub struct BillingList {
    pub billing: Vec<Billing>,
}
