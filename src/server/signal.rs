// Signal handling module
//
// SIGTERM and SIGINT trigger graceful shutdown. Other signals are left at
// their default disposition.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Start the signal handler task (Unix).
///
/// Fires `shutdown` once on the first SIGTERM or SIGINT.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            logger::log_error("Failed to register SIGTERM handler");
            return;
        };
        let Ok(mut sigint) = signal(SignalKind::interrupt()) else {
            logger::log_error("Failed to register SIGINT handler");
            return;
        };

        tokio::select! {
            _ = sigterm.recv() => logger::log_signal("SIGTERM"),
            _ = sigint.recv() => logger::log_signal("SIGINT"),
        }

        // notify_one stores a permit, so the signal is not lost if the
        // accept loop is mid-iteration
        shutdown.notify_one();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::log_signal("Ctrl+C");
            shutdown.notify_one();
        }
    });
}
