// Integration tests for the shared shutdown signal

use std::time::Duration;

use snowfall::shutdown::Shutdown;
use tokio::time::timeout;

#[tokio::test]
async fn test_trigger_wakes_all_waiters() {
    let shutdown = Shutdown::new();

    let mut waiters = Vec::new();
    for _ in 0..8 {
        let observer = shutdown.clone();
        waiters.push(tokio::spawn(async move {
            observer.triggered().await;
        }));
    }

    shutdown.trigger();

    for waiter in waiters {
        timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter was not woken")
            .unwrap();
    }
}

#[tokio::test]
async fn test_late_observer_sees_triggered_signal() {
    let shutdown = Shutdown::new();
    shutdown.trigger();

    // A waiter arriving after the trigger must not block
    let observer = shutdown.clone();
    timeout(Duration::from_millis(100), observer.triggered())
        .await
        .expect("late observer blocked on an already-triggered signal");
}

#[tokio::test]
async fn test_signal_stays_triggered() {
    let shutdown = Shutdown::new();
    shutdown.trigger();

    assert!(shutdown.is_triggered());
    shutdown.triggered().await;
    // Observation does not consume the signal
    assert!(shutdown.is_triggered());
    shutdown.triggered().await;
}
