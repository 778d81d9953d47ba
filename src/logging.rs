//! Tracing initialization.
//!
//! Server and one-shot modes log to stderr. The TUI must keep stderr clean
//! or the alternate screen gets corrupted, so it logs to a file named by
//! the `TLDW_LOG` environment variable and stays silent when that is
//! unset.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stderr logging for the server and one-shot modes.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .init();
}

/// File logging for the TUI, enabled by `TLDW_LOG`.
///
/// The path is uniquified with a timestamp and pid so concurrent instances
/// never clobber each other's logs.
pub fn init_for_tui() {
    let Ok(log_path) = std::env::var("TLDW_LOG") else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{log_path}.{timestamp}.{}", std::process::id());

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: failed to create log file at {unique_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();
}
