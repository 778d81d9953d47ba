//! Graceful shutdown signalling for the server.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tokio::sync::Notify;

/// Coordinates shutdown between the signal handler and the serve loop.
///
/// Shared behind an `Arc`; all methods take `&self`.
pub struct ShutdownManager {
    shutting_down: AtomicBool,
    notify: Notify,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutting_down: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }

    /// Trip the flag and wake every waiter.
    pub fn signal_shutdown(&self) {
        self.shutting_down.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Resolve when SIGINT or SIGTERM arrives, or when another task calls
    /// [`signal_shutdown`](Self::signal_shutdown).
    pub async fn wait_for_shutdown(&self) -> std::io::Result<()> {
        if self.is_shutting_down() {
            return Ok(());
        }

        #[cfg(unix)]
        {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
            tokio::select! {
                _ = signal::ctrl_c() => {
                    tracing::info!("received SIGINT, shutting down");
                }
                _ = sigterm.recv() => {
                    tracing::info!("received SIGTERM, shutting down");
                }
                _ = self.notify.notified() => {}
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    tracing::info!("received ctrl-c, shutting down");
                }
                _ = self.notify.notified() => {}
            }
        }

        self.shutting_down.store(true, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}
