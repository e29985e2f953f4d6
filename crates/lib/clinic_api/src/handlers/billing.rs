//! Billing record request handlers.

use axum::Json;
use axum::extract::{Path, State};

use clinic_core::models::records::{Billing, BillingCreate, BillingUpdate};
use clinic_core::records::billing;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ApiResponse, BillingList};

/// `POST /api/billing` — create a billing record.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<BillingCreate>,
) -> AppResult<Json<ApiResponse<Billing>>> {
    let bill = billing::create(&state.pool, body).await?;
    Ok(Json(ApiResponse::ok(
        "Billing record created successfully",
        bill,
    )))
}

/// `GET /api/billing/{bill_id}` — fetch a billing record.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(bill_id): Path<String>,
) -> AppResult<Json<ApiResponse<Billing>>> {
    let bill = billing::get(&state.pool, &bill_id).await?;
    Ok(Json(ApiResponse::ok(
        "Billing record retrieved successfully",
        bill,
    )))
}

/// `PUT /api/billing/{bill_id}` — partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(bill_id): Path<String>,
    Json(body): Json<BillingUpdate>,
) -> AppResult<Json<ApiResponse<Billing>>> {
    let bill = billing::update(&state.pool, &bill_id, body).await?;
    Ok(Json(ApiResponse::ok(
        "Billing record updated successfully",
        bill,
    )))
}

/// `DELETE /api/billing/{bill_id}` — remove a billing record.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(bill_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    billing::delete(&state.pool, &bill_id).await?;
    Ok(Json(ApiResponse::ok_empty(
        "Billing record deleted successfully",
    )))
}

/// `GET /api/billing` — list all billing records.
pub async fn list_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BillingList>>> {
    let billing = billing::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Billing records retrieved successfully",
        BillingList { billing },
    )))
}
