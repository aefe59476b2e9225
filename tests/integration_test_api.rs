mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &TestApp, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.router.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let response = send(&app, "GET", "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_admin_routes_require_bearer_token() {
    let app = TestApp::new().await;

    let response = send(&app, "GET", "/api/v1/admin/companies", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, "GET", "/api/v1/admin/bookings", Some("not-a-jwt"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(response).await["error"], "Unauthorized");
}

#[tokio::test]
async fn test_booking_flow_end_to_end() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let token = Some(token.as_str());

    // Company
    let response = send(&app, "POST", "/api/v1/admin/companies", token, Some(json!({
        "company_name": "Ada's Spa",
        "public_url": "ada-spa"
    }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let company = parse_body(response).await;
    let company_id = company["id"].as_str().unwrap().to_string();
    assert!(company.get("owner_id").is_none());

    let response = send(&app, "POST", "/api/v1/admin/companies", token, Some(json!({
        "company_name": "Second", "public_url": "second"
    }))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Services
    let response = send(&app, "POST", "/api/v1/admin/services", token, Some(json!({
        "company_id": company_id,
        "service_name": "Massage",
        "description": "Full body",
        "price": "50.00",
        "duration_min": 45
    }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let massage = parse_body(response).await;
    assert_eq!(massage["price"], "50.00");
    assert_eq!(massage["status"], 0);
    let massage_id = massage["id"].as_str().unwrap().to_string();

    let response = send(&app, "POST", "/api/v1/admin/services", token, Some(json!({
        "company_id": company_id,
        "service_name": "Facial",
        "price": "30.00",
        "duration_min": 30
    }))).await;
    let facial_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    let response = send(&app, "POST", "/api/v1/admin/services", token, Some(json!({
        "company_id": company_id, "service_name": "Broken", "price": "10.00", "duration_min": 0
    }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Working hours
    let response = send(&app, "POST", "/api/v1/admin/working-hours", token, Some(json!({
        "company_id": company_id, "day_of_week": 1, "start_time": "09:00", "end_time": "17:00"
    }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let monday = parse_body(response).await;
    assert_eq!(monday["start_time"], "09:00:00");
    assert_eq!(monday["is_active"], true);

    let response = send(&app, "POST", "/api/v1/admin/working-hours", token, Some(json!({
        "company_id": company_id, "day_of_week": 1, "start_time": "10:00", "end_time": "12:00"
    }))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Public storefront and client registration
    let response = send(&app, "GET", "/api/v1/public/companies/ADA-SPA", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let storefront = parse_body(response).await;
    assert_eq!(storefront["public_url"], "ada-spa");
    let names: Vec<&str> = storefront["services"].as_array().unwrap()
        .iter().map(|s| s["service_name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Facial", "Massage"]);

    let client_payload = json!({
        "first_name": "Grace", "last_name": "Hopper", "email": "grace@example.com"
    });
    let response = send(&app, "POST", "/api/v1/public/clients", None, Some(client_payload.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let client_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    let response = send(&app, "POST", "/api/v1/public/clients", None, Some(client_payload)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["id"], client_id.as_str());

    // Bookings
    let response = send(&app, "POST", "/api/v1/public/bookings", None, Some(json!({
        "service_id": massage_id, "client_id": client_id,
        "booking_date": "2024-01-10", "start_time": "10:00"
    }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let booking = parse_body(response).await;
    assert_eq!(booking["end_time"], "10:45:00");
    assert_eq!(booking["status"], 0);
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let response = send(&app, "POST", "/api/v1/admin/bookings", token, Some(json!({
        "service_id": facial_id, "client_id": client_id,
        "booking_date": "2024-02-05", "start_time": "11:00", "status": 1
    }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "POST", "/api/v1/public/bookings", None, Some(json!({
        "service_id": Uuid::new_v4(), "client_id": client_id,
        "booking_date": "2024-02-05", "start_time": "11:00"
    }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "POST", "/api/v1/public/bookings", None, Some(json!({
        "service_id": massage_id, "client_id": client_id,
        "booking_date": "2024-02-05", "start_time": "half past ten"
    }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "GET", "/api/v1/admin/bookings", token, None).await;
    let bookings = parse_body(response).await;
    assert_eq!(bookings.as_array().unwrap().len(), 2);
    assert_eq!(bookings[0]["client_name"], "Grace Hopper");
    assert_eq!(bookings[0]["service_name"], "Massage");

    // Turnover
    let response = send(&app, "GET", "/api/v1/admin/bookings/turnover", token, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["total"], "80.00");

    let uri = format!("/api/v1/admin/bookings/turnover?service_id={}", massage_id);
    let response = send(&app, "GET", &uri, token, None).await;
    let filtered = parse_body(response).await;
    assert_eq!(filtered["total"], "50.00");
    assert_eq!(filtered["service_id"], massage_id.as_str());

    let response = send(&app, "GET", "/api/v1/admin/bookings/monthly-turnover", token, None).await;
    assert_eq!(parse_body(response).await, json!([
        { "month": "Jan", "revenue": "50.00" },
        { "month": "Feb", "revenue": "30.00" }
    ]));

    // Reschedule recomputes the end time
    let uri = format!("/api/v1/admin/bookings/{}", booking_id);
    let response = send(&app, "PUT", &uri, token, Some(json!({ "start_time": "23:30", "status": 2 }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let moved = parse_body(response).await;
    assert_eq!(moved["end_time"], "24:15:00");
    assert_eq!(moved["status"], 2);
    assert_eq!(moved["client_name"], "Grace Hopper");

    let response = send(&app, "DELETE", &uri, token, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(&app, "GET", &uri, token, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owners_cannot_touch_each_other() {
    let app = TestApp::new().await;
    let owner = app.token_for(Uuid::new_v4());
    let intruder = app.token_for(Uuid::new_v4());

    let response = send(&app, "POST", "/api/v1/admin/companies", Some(owner.as_str()), Some(json!({
        "company_name": "Mine", "public_url": "mine"
    }))).await;
    let company_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    let response = send(&app, "POST", "/api/v1/admin/services", Some(owner.as_str()), Some(json!({
        "company_id": company_id, "service_name": "Cut", "price": "25.00", "duration_min": 30
    }))).await;
    let service_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    let response = send(&app, "POST", "/api/v1/public/clients", None, Some(json!({
        "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"
    }))).await;
    let client_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    // Booking a foreign service through the admin API is an invalid reference.
    let response = send(&app, "POST", "/api/v1/admin/bookings", Some(intruder.as_str()), Some(json!({
        "service_id": service_id, "client_id": client_id,
        "booking_date": "2024-04-01", "start_time": "10:00"
    }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let uri = format!("/api/v1/admin/services/{}", service_id);
    let response = send(&app, "DELETE", &uri, Some(intruder.as_str()), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "PUT", &format!("/api/v1/admin/companies/{}", company_id), Some(intruder.as_str()), Some(json!({
        "company_name": "Hijacked"
    }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", &uri, Some(owner.as_str()), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["service_name"], "Cut");

    let response = send(&app, "GET", "/api/v1/admin/services", Some(intruder.as_str()), None).await;
    assert_eq!(parse_body(response).await, json!([]));
}
