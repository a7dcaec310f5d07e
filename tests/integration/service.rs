//! HTTP boundary tests driven through the router without a socket.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pdfbatch::batch::BatchResult;
use pdfbatch::config::Config;
use pdfbatch::server::{handlers::HealthResponse, router};
use tower::ServiceExt;

use crate::common::Workspace;

fn config_for(ws: &Workspace) -> Config {
    Config {
        input_root: ws.input_root.clone(),
        output_root: ws.output_root.clone(),
        ..Config::default()
    }
}

async fn send(config: Config, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router(config)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn trigger(ws: &Workspace) -> (StatusCode, BatchResult) {
    let (status, body) = send(
        config_for(ws),
        "POST",
        "/api/pdfmerge/merge-all-companies",
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let ws = Workspace::without_input_root();

    let (status, body) = send(config_for(&ws), "GET", "/api/pdfmerge/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "Healthy");
}

#[tokio::test]
async fn test_successful_batch_is_ok() {
    let ws = Workspace::new();
    ws.add_pdf("Acme", "a.pdf", 1);
    ws.add_pdf("Acme", "b.pdf", 2);

    let (status, result) = trigger(&ws).await;
    assert_eq!(status, StatusCode::OK);
    assert!(result.succeeded);
    assert_eq!(result.successful_count, 1);
    assert!(ws.output_for("Acme").exists());
}

#[tokio::test]
async fn test_partial_failure_is_still_ok() {
    let ws = Workspace::new();
    ws.add_pdf("Good", "a.pdf", 1);
    ws.add_corrupt_pdf("Bad", "x.pdf");
    ws.add_corrupt_pdf("Bad", "y.pdf");

    let (status, result) = trigger(&ws).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.failed_count, 1);
    assert!(!result.company_outcomes[0].succeeded);
}

#[tokio::test]
async fn test_missing_root_is_bad_request_with_payload() {
    let ws = Workspace::without_input_root();

    let (status, result) = trigger(&ws).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!result.succeeded);
    assert_eq!(result.total_companies, 0);
    assert!(result.message.contains("PDFs directory not found"));
}

#[tokio::test]
async fn test_merged_files_are_served() {
    let ws = Workspace::new();
    ws.add_pdf("Acme", "only.pdf", 1);

    let (status, _) = trigger(&ws).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(config_for(&ws), "GET", "/merged/Acme_merged.pdf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, std::fs::read(ws.output_for("Acme")).unwrap());
}

#[tokio::test]
async fn test_trigger_requires_post() {
    let ws = Workspace::new();

    let (status, _) = send(
        config_for(&ws),
        "GET",
        "/api/pdfmerge/merge-all-companies",
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
