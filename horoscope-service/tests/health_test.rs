mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::TestHealthApp;
use horoscope_service::startup::health_router;
use reqwest::Client;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = TestHealthApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "horoscope-sender");
    assert!(body["timestamp"].as_f64().is_some_and(|t| t > 0.0));
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestHealthApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["service"], "horoscope-sender");
    assert!(body.get("timestamp").is_none());
}

#[tokio::test]
async fn health_is_reported_without_any_pipeline() {
    let response = health_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let response = health_router()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn metrics_endpoint_serves_text() {
    let response = health_router()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn second_server_on_a_taken_port_fails_to_bind() {
    let app = TestHealthApp::spawn().await;

    let result = horoscope_service::startup::HealthServer::build(app.port).await;

    assert!(result.is_err());
}
