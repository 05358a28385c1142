// Metrics and health check module

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder,
};
use std::sync::Once;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // Pipeline metrics
    pub static ref ITEMS_PRODUCED: IntCounter = IntCounter::new(
        "snowfall_items_produced_total",
        "Total values handed off to the queue"
    ).unwrap();

    pub static ref ITEMS_DELIVERED: IntCounter = IntCounter::new(
        "snowfall_items_delivered_total",
        "Total values delivered to workers"
    ).unwrap();

    pub static ref WORKERS_ACTIVE: IntGauge = IntGauge::new(
        "snowfall_workers_active",
        "Number of live worker tasks"
    ).unwrap();

    // Performance metrics
    pub static ref HANDOFF_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "snowfall_handoff_duration_seconds",
            "Time the producer waited to hand a value to a worker"
        ).buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0])
    ).unwrap();
}

static INIT: Once = Once::new();

/// Initialize metrics registry
pub fn init_metrics() {
    INIT.call_once(|| {
        REGISTRY.register(Box::new(ITEMS_PRODUCED.clone())).unwrap();
        REGISTRY.register(Box::new(ITEMS_DELIVERED.clone())).unwrap();
        REGISTRY.register(Box::new(WORKERS_ACTIVE.clone())).unwrap();
        REGISTRY.register(Box::new(HANDOFF_DURATION.clone())).unwrap();
    });
}

/// Get metrics as text in Prometheus format
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub pipeline_state: String,
    pub workers_active: i64,
    pub items_produced: u64,
    pub items_delivered: u64,
}

impl HealthStatus {
    pub fn new(pipeline_state: &str, uptime_seconds: u64) -> Self {
        Self {
            status: if pipeline_state == "running" {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            uptime_seconds,
            pipeline_state: pipeline_state.to_string(),
            workers_active: WORKERS_ACTIVE.get(),
            items_produced: ITEMS_PRODUCED.get(),
            items_delivered: ITEMS_DELIVERED.get(),
        }
    }
}
