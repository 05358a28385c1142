// Integration tests for the monitoring server

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use snowfall::metrics;
use snowfall::pipeline::PipelineState;
use snowfall::server::{self, ServerState};
use snowfall::shutdown::Shutdown;
use tokio::time::timeout;
use tower::ServiceExt;

use crate::find_available_port;

fn state_with(pipeline_state: PipelineState) -> ServerState {
    ServerState {
        start_time: Instant::now(),
        pipeline_state: Arc::new(Mutex::new(pipeline_state)),
    }
}

#[tokio::test]
async fn test_metrics_endpoint() {
    metrics::init_metrics();
    metrics::ITEMS_PRODUCED.inc();

    let app = server::router(state_with(PipelineState::Running));
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("snowfall_items_produced_total"));
}

#[tokio::test]
async fn test_health_endpoint_healthy_while_running() {
    let app = server::router(state_with(PipelineState::Running));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["pipeline_state"], "running");
}

#[tokio::test]
async fn test_health_endpoint_degraded_after_stop() {
    let app = server::router(state_with(PipelineState::Stopped));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_ready_endpoint() {
    let app = server::router(state_with(PipelineState::Running));
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = server::router(state_with(PipelineState::ShuttingDown));
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_server_stops_on_shutdown_signal() {
    let port = find_available_port();
    let shutdown = Shutdown::new();

    let server = tokio::spawn(server::start_monitoring_server(
        port,
        state_with(PipelineState::Running),
        shutdown.clone(),
    ));

    // Give the server time to bind, then trigger shutdown
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.trigger();

    let result = timeout(Duration::from_secs(1), server)
        .await
        .expect("server did not stop on shutdown signal")
        .unwrap();
    assert!(result.is_ok());
}
