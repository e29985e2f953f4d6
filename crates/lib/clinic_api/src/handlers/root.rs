//! Root endpoint.

use axum::Json;

/// `GET /` — service banner.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Clinic Management System API"}))
}
