//! Integration tests for the auth routes — register, login, and the
//! identity-resolution contract behind `/api/auth/me`.

mod common;

use axum::http::{StatusCode, header};
use common::{TestApp, json_body, register_and_login};

#[tokio::test]
async fn register_login_me_round_trip() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let resp = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "user_name": "Asha Rai",
                "email": "a@x.com",
                "phone": "555-0101",
                "password": "secret123",
            })),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "a@x.com");
    // The password hash must never appear in a response.
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());

    let resp = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"email": "a@x.com", "password": "secret123"})),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["token_type"], "bearer");
    let token = body["data"]["access_token"].as_str().expect("token");

    let resp = app
        .request("GET", "/api/auth/me", None, Some(token))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["user_name"], "Asha Rai");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());

    app.shutdown().await;
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    register_and_login(&app, "a@x.com", "secret123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"email": "a@x.com", "password": "wrongpass"})),
            None,
        )
        .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"email": "nobody@x.com", "password": "secret123"})),
            None,
        )
        .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical body for both rejections, so responses cannot be used to
    // probe which addresses have accounts.
    let a = json_body(wrong_password).await;
    let b = json_body(unknown_email).await;
    assert_eq!(a, b);

    app.shutdown().await;
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let payload = serde_json::json!({
        "user_name": "Asha Rai",
        "email": "a@x.com",
        "phone": "555-0101",
        "password": "secret123",
    });
    let first = app
        .request("POST", "/api/auth/register", Some(payload.clone()), None)
        .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .request("POST", "/api/auth/register", Some(payload), None)
        .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = json_body(second).await;
    assert_eq!(body["message"], "Email already registered");

    app.shutdown().await;
}

#[tokio::test]
async fn token_for_deleted_account_no_longer_resolves() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let token = register_and_login(&app, "a@x.com", "secret123").await;

    sqlx::query("DELETE FROM users WHERE email = $1")
        .bind("a@x.com")
        .execute(&app.state.pool)
        .await
        .expect("delete user");

    let resp = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    app.shutdown().await;
}

#[tokio::test]
async fn me_rejects_missing_and_garbage_tokens() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        missing
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);

    app.shutdown().await;
}
