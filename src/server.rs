// HTTP server for health checks and metrics

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::metrics::{get_metrics, HealthStatus};
use crate::pipeline::PipelineState;
use crate::shutdown::Shutdown;

/// Shared state for the monitoring server
#[derive(Clone)]
pub struct ServerState {
    pub start_time: std::time::Instant,
    pub pipeline_state: Arc<std::sync::Mutex<PipelineState>>,
}

/// Router serving the monitoring surface
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the monitoring server; stops when the shutdown signal fires
pub async fn start_monitoring_server(
    port: u16,
    state: ServerState,
    shutdown: Shutdown,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("starting monitoring server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!("monitoring server error: {}", e);
            }
        }
        _ = shutdown.triggered() => {
            info!("monitoring server stopping");
        }
    }

    Ok(())
}

/// Metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        get_metrics(),
    )
}

/// Health endpoint handler
async fn health_handler(State(state): State<ServerState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();
    let pipeline_state = state.pipeline_state.lock().unwrap();

    let health = HealthStatus::new(pipeline_state.as_str(), uptime);

    let status_code = if health.status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health))
}

/// Readiness endpoint handler
async fn ready_handler(State(state): State<ServerState>) -> impl IntoResponse {
    let pipeline_state = state.pipeline_state.lock().unwrap();

    match *pipeline_state {
        PipelineState::Running => (
            StatusCode::OK,
            Json(serde_json::json!({
                "ready": true,
                "state": pipeline_state.as_str()
            })),
        ),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "ready": false,
                "state": pipeline_state.as_str()
            })),
        ),
    }
}
