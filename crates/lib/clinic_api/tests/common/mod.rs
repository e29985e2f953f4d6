//! Shared harness for integration tests — ephemeral PostgreSQL, migrated
//! schema, and an in-process router driven with `tower::ServiceExt`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use clinic_api::AppState;
use clinic_api::config::{ApiConfig, TokenConfig};
use clinic_core::auth::jwt::Algorithm;
use clinic_core::db::EphemeralPg;

pub struct TestApp {
    pub pg: EphemeralPg,
    pub state: AppState,
}

impl TestApp {
    /// Spin up an ephemeral PostgreSQL instance and migrate the schema.
    /// Returns `None` (test skips) when PostgreSQL binaries are not on PATH.
    pub async fn spawn() -> Option<TestApp> {
        if !EphemeralPg::available().await {
            eprintln!("pg_config not found on PATH; skipping");
            return None;
        }
        let pg = EphemeralPg::start().await.expect("start ephemeral PG");
        let pool = clinic_core::db::connect(&pg.connection_url(), 5)
            .await
            .expect("connect to ephemeral PG");
        clinic_api::migrate(&pool).await.expect("run migrations");

        let state = AppState {
            pool,
            config: ApiConfig {
                bind_addr: "127.0.0.1:0".into(),
                database_url: pg.connection_url(),
                token: TokenConfig {
                    secret: "test-secret".into(),
                    algorithm: Algorithm::HS256,
                    ttl_minutes: 30,
                },
            },
        };
        Some(TestApp { pg, state })
    }

    pub fn router(&self) -> Router {
        clinic_api::router(self.state.clone())
    }

    /// Fire one request at the router and return the raw response.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
        bearer: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };
        self.router().oneshot(request).await.expect("send request")
    }

    /// Close the pool and stop the database.
    pub async fn shutdown(mut self) {
        self.state.pool.close().await;
        self.pg.stop().await.expect("stop ephemeral PG");
    }
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

/// Register an account and log in, returning the bearer token.
pub async fn register_and_login(app: &TestApp, email: &str, password: &str) -> String {
    let resp = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "user_name": "Test User",
                "email": email,
                "phone": "555-0100",
                "password": password,
            })),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"email": email, "password": password})),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    body["data"]["access_token"]
        .as_str()
        .expect("access_token")
        .to_string()
}
