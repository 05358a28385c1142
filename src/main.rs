// src/main.rs
//
// A flurry of random numbers for a crew of workers

use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use snowfall::config::{Config, LogFormat};
use snowfall::logging;
use snowfall::metrics;
use snowfall::pipeline::{Pipeline, PipelineState};
use snowfall::server::{self, ServerState};
use snowfall::shutdown::{self, Shutdown};
use snowfall::validation::validators;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A concurrent pipeline that hands random values to a crew of competing workers")]
struct Args {
    /// Number of worker tasks consuming from the queue
    #[arg(value_name = "WORKERS", value_parser = validators::parse_worker_count)]
    workers: usize,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH", help = "Path to a TOML configuration file")]
    config: Option<String>,

    /// Delay between produced values
    #[arg(long, value_name = "MILLIS", help = "Delay between produced values in milliseconds", value_parser = validators::parse_interval_ms)]
    interval_ms: Option<u64>,

    /// Exclusive upper bound for produced values
    #[arg(long, value_name = "BOUND", help = "Values are drawn uniformly from [0, BOUND)", value_parser = validators::parse_value_bound)]
    max_value: Option<u32>,

    /// Logging level
    #[arg(long, value_name = "LEVEL", help = "Logging level (trace, debug, info, warn, error)", value_parser = validators::parse_log_level)]
    log_level: Option<String>,

    /// Logging format
    #[arg(long, value_name = "FORMAT", help = "Logging format (text or json)", value_parser = validators::parse_log_format)]
    log_format: Option<String>,

    /// Serve /metrics and /health on this port
    #[arg(long, value_name = "PORT", help = "Enable the monitoring server on this port")]
    monitoring_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Config file, then environment, then flags; later layers win
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_env_vars();

    config.pipeline.workers = args.workers;
    if let Some(ms) = args.interval_ms {
        config.pipeline.interval_ms = ms;
    }
    if let Some(bound) = args.max_value {
        config.pipeline.max_value = bound;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(format) = args.log_format {
        config.logging.format = if format == "json" {
            LogFormat::Json
        } else {
            LogFormat::Text
        };
    }
    if let Some(port) = args.monitoring_port {
        config.monitoring.enabled = true;
        config.monitoring.port = port;
    }

    config.validate()?;

    // Initialize logging
    logging::setup(&config.logging);

    info!("starting snowfall v{}", env!("CARGO_PKG_VERSION"));

    // Shared cancellation signal, triggered once by the signal listener
    let shutdown = Shutdown::new();
    shutdown::spawn_listener(shutdown.clone());

    // Monitoring surface, stopped by the same shutdown signal
    if config.monitoring.enabled {
        metrics::init_metrics();

        let pipeline_state = Arc::new(Mutex::new(PipelineState::Running));
        let server_state = ServerState {
            start_time: Instant::now(),
            pipeline_state: Arc::clone(&pipeline_state),
        };

        let port = config.monitoring.port;
        let server_shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = server::start_monitoring_server(port, server_state, server_shutdown).await {
                error!(error = %e, "monitoring server failed");
            }
        });

        let watcher_shutdown = shutdown.clone();
        tokio::spawn(async move {
            watcher_shutdown.triggered().await;
            *pipeline_state.lock().unwrap() = PipelineState::ShuttingDown;
        });
    }

    // Run the pipeline; blocks until every worker has stopped
    let pipeline = Pipeline::new(config.pipeline.clone(), shutdown);
    let summary = pipeline.run().await;

    info!(
        produced = summary.produced,
        delivered = summary.delivered,
        "shutting down"
    );
    Ok(())
}
