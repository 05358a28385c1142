// Shutdown coordination and OS signal handling

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared cancellation signal for coordinated shutdown.
///
/// Cloned into every task at spawn time; all clones observe the same
/// underlying token. Triggering is idempotent and never reverts.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
}

impl Shutdown {
    /// Create a new shutdown signal
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Trigger the shutdown signal, waking all current and future waiters
    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// Whether the signal has been triggered
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the signal is triggered; ready forever after
    pub async fn triggered(&self) {
        self.token.cancelled().await
    }
}

/// Block until an OS termination signal (SIGINT or SIGTERM) arrives
#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

/// Block until ctrl-c arrives
#[cfg(not(unix))]
pub async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Spawn the signal listener task.
///
/// Waits for one termination signal, triggers the shutdown signal once,
/// then terminates.
pub fn spawn_listener(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        wait_for_signal().await;
        info!("interrupt received, stopping pipeline");
        shutdown.trigger();
    })
}
