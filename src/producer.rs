// Producer task: random values onto the shared queue

use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::mpsc::Sender;
use tokio::time::sleep;
use tracing::{info, trace};

use crate::metrics;
use crate::shutdown::Shutdown;

/// Final accounting from a producer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProducerReport {
    /// Values successfully handed off to the queue
    pub sent: u64,
}

/// Run the producer until the shutdown signal is observed.
///
/// Each iteration draws a uniform random value in [0, max_value) and races
/// the handoff against cancellation. Cancellation takes priority: once the
/// signal is triggered, no further value enters the queue, so everything the
/// producer counted as sent is there for a worker to consume. The post-send
/// delay is deliberately not raced; cancellation takes effect at the next
/// iteration boundary, bounding shutdown latency by one interval.
///
/// Dropping the sender on return closes the queue, which is the signal to
/// workers that no more data will ever come.
pub async fn run(
    tx: Sender<u32>,
    interval: Duration,
    max_value: u32,
    shutdown: Shutdown,
) -> ProducerReport {
    let mut sent = 0u64;

    loop {
        let value = rand::rng().random_range(0..max_value);
        let started = Instant::now();

        tokio::select! {
            biased;

            _ = shutdown.triggered() => break,
            result = tx.send(value) => {
                if result.is_err() {
                    // All workers are gone; nothing left to produce for
                    break;
                }
                metrics::ITEMS_PRODUCED.inc();
                metrics::HANDOFF_DURATION.observe(started.elapsed().as_secs_f64());
                trace!(value, "value handed off");
                sent += 1;
            }
        }

        sleep(interval).await;
    }

    info!(sent, "producer stopping");
    ProducerReport { sent }
}
