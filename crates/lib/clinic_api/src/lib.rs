//! # clinic_api
//!
//! HTTP API library for the clinic backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{
    appointments, auth, billing, dashboard, medical_records, patients, root, staff,
};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `clinic_core::migrate::migrate()` which owns the migration
/// files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    clinic_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/", get(root::index))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route(
            "/api/patients",
            get(patients::list_handler).post(patients::create_handler),
        )
        .route(
            "/api/patients/{patient_id}",
            get(patients::get_handler)
                .put(patients::update_handler)
                .delete(patients::delete_handler),
        )
        .route(
            "/api/staff",
            get(staff::list_handler).post(staff::create_handler),
        )
        .route(
            "/api/staff/{staff_id}",
            get(staff::get_handler)
                .put(staff::update_handler)
                .delete(staff::delete_handler),
        )
        .route(
            "/api/appointments",
            get(appointments::list_handler).post(appointments::create_handler),
        )
        .route(
            "/api/appointments/{appointment_id}",
            get(appointments::get_handler)
                .put(appointments::update_handler)
                .delete(appointments::delete_handler),
        )
        .route(
            "/api/medical-records",
            get(medical_records::list_handler).post(medical_records::create_handler),
        )
        .route(
            "/api/medical-records/{record_id}",
            get(medical_records::get_handler)
                .put(medical_records::update_handler)
                .delete(medical_records::delete_handler),
        )
        .route(
            "/api/billing",
            get(billing::list_handler).post(billing::create_handler),
        )
        .route(
            "/api/billing/{bill_id}",
            get(billing::get_handler)
                .put(billing::update_handler)
                .delete(billing::delete_handler),
        );

    // Protected routes (require auth)
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me_handler))
        .route("/api/dashboard", get(dashboard::overview_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
