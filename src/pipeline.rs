// Pipeline coordinator: wires the producer, workers, and shutdown signal

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::producer;
use crate::shutdown::Shutdown;
use crate::worker::{self, WorkerReport};

/// Observable lifecycle state, reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Running,
    ShuttingDown,
    Stopped,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Running => "running",
            PipelineState::ShuttingDown => "shutting down",
            PipelineState::Stopped => "stopped",
        }
    }
}

/// Final accounting from a pipeline run
#[derive(Debug)]
pub struct RunSummary {
    /// Values the producer handed off
    pub produced: u64,
    /// Values workers received
    pub delivered: u64,
    /// One report per worker, in completion order
    pub reports: Vec<WorkerReport>,
}

/// Coordinator for one producer and N competing workers.
///
/// The queue has capacity one: the producer blocks until a worker is ready
/// to take the next value. Only the producer closes the queue, and only
/// after it has stopped sending.
pub struct Pipeline {
    config: PipelineConfig,
    shutdown: Shutdown,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, shutdown: Shutdown) -> Self {
        Self { config, shutdown }
    }

    /// A clone of the shutdown handle driving this pipeline
    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Run the pipeline until shutdown, then join every worker.
    ///
    /// Returns once all workers have reported, which is the completion
    /// barrier the caller blocks on.
    pub async fn run(self) -> RunSummary {
        let workers = self.config.workers;
        info!(
            workers,
            interval_ms = self.config.interval_ms,
            max_value = self.config.max_value,
            "starting pipeline"
        );

        let (tx, rx) = mpsc::channel::<u32>(1);
        let queue = Arc::new(Mutex::new(rx));

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            handles.push(tokio::spawn(worker::run(
                id,
                Arc::clone(&queue),
                self.shutdown.clone(),
            )));
        }

        let producer_handle = tokio::spawn(producer::run(
            tx,
            self.config.interval(),
            self.config.max_value,
            self.shutdown.clone(),
        ));

        let mut reports = Vec::with_capacity(workers);
        for (id, outcome) in join_all(handles).await.into_iter().enumerate() {
            match outcome {
                Ok(report) => reports.push(report),
                Err(e) => error!(worker = id, error = %e, "worker task failed"),
            }
        }

        let produced = match producer_handle.await {
            Ok(report) => report.sent,
            Err(e) => {
                error!(error = %e, "producer task failed");
                0
            }
        };

        let delivered = reports.iter().map(|r| r.received).sum();
        info!(workers = reports.len(), produced, delivered, "all workers stopped");

        RunSummary {
            produced,
            delivered,
            reports,
        }
    }
}
