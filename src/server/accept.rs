// Accept loop module
// Accepts connections until shutdown is signalled, then drains in-flight
// connections for a bounded grace period

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until the shutdown signal fires.
pub async fn run_accept_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown_started();
                break;
            }
        }
    }

    // Close the listener before draining so no new connections sneak in
    drop(listener);
    drain_connections(&active_connections, state.config.performance.shutdown_grace).await;
}

/// Wait for in-flight connections to finish, up to `grace_secs` seconds.
async fn drain_connections(active: &Arc<AtomicUsize>, grace_secs: u64) {
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(grace_secs);

    loop {
        let remaining = active.load(Ordering::SeqCst);
        if remaining == 0 || tokio::time::Instant::now() >= deadline {
            logger::log_shutdown_complete(remaining);
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drain_returns_immediately_when_idle() {
        let active = Arc::new(AtomicUsize::new(0));
        let started = std::time::Instant::now();
        drain_connections(&active, 5).await;
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_drain_gives_up_after_grace_period() {
        let active = Arc::new(AtomicUsize::new(3));
        let started = std::time::Instant::now();
        drain_connections(&active, 0).await;
        // Still three active: the grace period expired rather than the count
        assert_eq!(active.load(Ordering::SeqCst), 3);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }
}
