// Worker task: competing consumer on the shared queue

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tokio::sync::Mutex;
use tracing::info;

use crate::metrics;
use crate::shutdown::Shutdown;

/// Receiver end of the data queue, shared among all workers.
///
/// Exactly one worker at a time holds the lock while waiting to receive, so
/// each value is delivered to exactly one worker.
pub type SharedReceiver = Arc<Mutex<Receiver<u32>>>;

/// Why a worker terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The shutdown signal was observed
    Cancelled,
    /// The producer closed the queue
    ChannelClosed,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Cancelled => write!(f, "cancelled"),
            StopReason::ChannelClosed => write!(f, "channel closed"),
        }
    }
}

/// Final accounting from a worker run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub id: usize,
    pub reason: StopReason,
    pub received: u64,
}

/// Run a worker until the queue closes or shutdown is observed.
///
/// Receiving takes priority over cancellation so that values already handed
/// off are consumed rather than abandoned; the cancellation branch is taken
/// only once the queue is quiet.
pub async fn run(id: usize, queue: SharedReceiver, shutdown: Shutdown) -> WorkerReport {
    metrics::WORKERS_ACTIVE.inc();
    let mut received = 0u64;

    let reason = loop {
        tokio::select! {
            biased;

            item = next_value(&queue) => match item {
                Some(value) => {
                    info!(worker = id, value, "received value");
                    metrics::ITEMS_DELIVERED.inc();
                    received += 1;
                }
                None => break StopReason::ChannelClosed,
            },

            _ = shutdown.triggered() => break StopReason::Cancelled,
        }
    };

    if reason == StopReason::Cancelled {
        // A send racing cancellation can park one value in the queue buffer
        received += drain_parked(id, &queue);
    }

    info!(worker = id, reason = %reason, received, "worker stopping");
    metrics::WORKERS_ACTIVE.dec();
    WorkerReport { id, reason, received }
}

async fn next_value(queue: &SharedReceiver) -> Option<u32> {
    queue.lock().await.recv().await
}

fn drain_parked(id: usize, queue: &SharedReceiver) -> u64 {
    let mut drained = 0u64;
    if let Ok(mut rx) = queue.try_lock() {
        while let Ok(value) = rx.try_recv() {
            info!(worker = id, value, "received value");
            metrics::ITEMS_DELIVERED.inc();
            drained += 1;
        }
    }
    drained
}
