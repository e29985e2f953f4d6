//! Integration tests for the record routes and the dashboard aggregation.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{TestApp, json_body, register_and_login};

#[tokio::test]
async fn patient_crud_round_trip() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let resp = app
        .request(
            "POST",
            "/api/patients",
            Some(serde_json::json!({
                "first_name": "John",
                "last_name": "Doe",
                "date_of_birth": "1984-02-29",
                "gender": "male",
                "contact_number": "555-0102",
                "email": "john@x.com",
                "address": "12 High St",
                "emergency_contact": "555-0103",
            })),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Patient created successfully");
    let patient_id = body["data"]["patient_id"].as_str().expect("patient_id");
    assert!(patient_id.starts_with("PAT_"));

    let resp = app
        .request("GET", &format!("/api/patients/{patient_id}"), None, None)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["first_name"], "John");

    // Partial update: only the address changes, other fields keep their
    // stored values.
    let resp = app
        .request(
            "PUT",
            &format!("/api/patients/{patient_id}"),
            Some(serde_json::json!({"address": "90 Low Rd"})),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["address"], "90 Low Rd");
    assert_eq!(body["data"]["first_name"], "John");

    let resp = app.request("GET", "/api/patients", None, None).await;
    let body = json_body(resp).await;
    assert_eq!(body["data"]["patients"].as_array().map(Vec::len), Some(1));

    let resp = app
        .request("DELETE", &format!("/api/patients/{patient_id}"), None, None)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"], serde_json::Value::Null);

    let resp = app
        .request("GET", &format!("/api/patients/{patient_id}"), None, None)
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Patient not found");

    let resp = app
        .request("DELETE", &format!("/api/patients/{patient_id}"), None, None)
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.shutdown().await;
}

#[tokio::test]
async fn appointment_starts_scheduled_and_can_complete() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let resp = app
        .request(
            "POST",
            "/api/appointments",
            Some(serde_json::json!({
                "patient_id": "PAT_00000001",
                "doctor_id": "STF_00000001",
                "appointment_date": "2026-09-01T10:00:00",
                "reason_for_visit": "Check-up",
            })),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["status"], "Scheduled");
    assert_eq!(body["data"]["notes"], serde_json::Value::Null);
    let appointment_id = body["data"]["appointment_id"].as_str().expect("id").to_string();

    let resp = app
        .request(
            "PUT",
            &format!("/api/appointments/{appointment_id}"),
            Some(serde_json::json!({"status": "Completed", "notes": "All clear"})),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["status"], "Completed");
    assert_eq!(body["data"]["notes"], "All clear");
    assert_eq!(body["data"]["reason_for_visit"], "Check-up");

    app.shutdown().await;
}

#[tokio::test]
async fn dashboard_requires_auth_and_aggregates_collections() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let resp = app.request("GET", "/api/dashboard", None, None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = register_and_login(&app, "a@x.com", "secret123").await;
    let today = Utc::now().date_naive();

    // One patient, one doctor hired this morning, one appointment today,
    // one paid bill, one past visit.
    let resp = app
        .request(
            "POST",
            "/api/patients",
            Some(serde_json::json!({
                "first_name": "John",
                "last_name": "Doe",
                "date_of_birth": "1984-02-29",
                "gender": "male",
                "contact_number": "555-0102",
                "email": "john@x.com",
                "address": "12 High St",
                "emergency_contact": "555-0103",
            })),
            None,
        )
        .await;
    let patient_id = json_body(resp).await["data"]["patient_id"]
        .as_str()
        .expect("patient_id")
        .to_string();

    let resp = app
        .request(
            "POST",
            "/api/staff",
            Some(serde_json::json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "role": "Doctor",
                "specialization": "Cardiology",
                "contact_number": "555-0104",
                "email": "grace@x.com",
                "hire_date": format!("{today}T08:00:00"),
            })),
            None,
        )
        .await;
    let staff_id = json_body(resp).await["data"]["staff_id"]
        .as_str()
        .expect("staff_id")
        .to_string();

    let resp = app
        .request(
            "POST",
            "/api/appointments",
            Some(serde_json::json!({
                "patient_id": patient_id,
                "doctor_id": staff_id,
                "appointment_date": format!("{today}T09:30:00"),
                "reason_for_visit": "Check-up",
            })),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .request(
            "POST",
            "/api/billing",
            Some(serde_json::json!({
                "patient_id": patient_id,
                "appointment_id": "APT_00000001",
                "total_amount": 200.0,
                "paid_amount": 150.0,
                "payment_method": "Cash",
                "billing_date": format!("{today}T09:45:00"),
            })),
            None,
        )
        .await;
    let bill_id = json_body(resp).await["data"]["bill_id"]
        .as_str()
        .expect("bill_id")
        .to_string();
    // Bills start Pending; only paid ones count toward revenue.
    let resp = app
        .request(
            "PUT",
            &format!("/api/billing/{bill_id}"),
            Some(serde_json::json!({"payment_status": "Paid"})),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .request(
            "POST",
            "/api/medical-records",
            Some(serde_json::json!({
                "patient_id": patient_id,
                "doctor_id": staff_id,
                "visit_date": format!("{today}T09:40:00"),
                "diagnosis": "Healthy",
                "treatment": "None required",
            })),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .request("GET", "/api/dashboard", None, Some(&token))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let stats = &body["data"]["stats"];
    assert_eq!(stats["total_patients"], 1);
    assert_eq!(stats["patients_change"], "0% from last month");
    assert_eq!(stats["appointments_today"], 1);
    assert_eq!(stats["appointments_change"], "+1 than yesterday");
    assert_eq!(stats["staff_members"], 1);
    assert_eq!(stats["staff_change"], "+1 this month");
    assert_eq!(stats["total_revenue"], "$150.00");
    assert_eq!(stats["revenue_change"], "0% from last month");

    let today_appointments = body["data"]["today_appointments"]
        .as_array()
        .expect("today_appointments");
    assert_eq!(today_appointments.len(), 1);
    assert_eq!(today_appointments[0]["patient_name"], "John Doe");
    assert_eq!(today_appointments[0]["doctor_name"], "Dr. Grace Hopper");
    assert_eq!(today_appointments[0]["time"], "09:30 AM");
    assert_eq!(today_appointments[0]["status"], "Scheduled");

    assert_eq!(body["data"]["appointment_stats"]["pending"], 1);
    assert_eq!(body["data"]["appointment_stats"]["confirmed"], 0);
    assert_eq!(body["data"]["appointment_stats"]["cancelled"], 0);

    let recent = body["data"]["recent_patients"]
        .as_array()
        .expect("recent_patients");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["name"], "John Doe");
    assert_eq!(recent[0]["phone"], "555-0102");
    assert_eq!(recent[0]["last_visit"], today.to_string());

    assert_eq!(
        body["data"]["quick_actions"].as_array().map(Vec::len),
        Some(5)
    );

    app.shutdown().await;
}
