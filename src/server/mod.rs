//! HTTP backend serving the summarize contract.

pub mod error;
mod routes;
mod shutdown;

pub use error::ServerError;
pub use routes::{build_router, AppState};
pub use shutdown::ShutdownManager;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::summarize::Summarizer;

/// The summarize server: a bound listener plus the routes around one
/// injected [`Summarizer`].
pub struct SummarizeServer {
    addr: SocketAddr,
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl SummarizeServer {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state: AppState { summarizer },
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Bind ahead of [`run`](Self::run) so callers learn the final address;
    /// tests bind port 0.
    pub async fn bind(&mut self, addr: &str) -> std::io::Result<SocketAddr> {
        let listener = TcpListener::bind(addr).await?;
        self.addr = listener.local_addr()?;
        self.listener = Some(listener);
        tracing::info!(addr = %self.addr, "summarize server bound");
        Ok(self.addr)
    }

    /// Handle used to stop the server from another task.
    pub fn shutdown_handle(&self) -> Arc<ShutdownManager> {
        self.shutdown.clone()
    }

    /// Serve until a shutdown signal arrives. Call [`bind`](Self::bind)
    /// first.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;
        tracing::info!(addr = %self.addr, "summarize server listening");

        let router = build_router(self.state);
        let shutdown = self.shutdown;
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.wait_for_shutdown().await;
            })
            .await?;

        tracing::info!("summarize server stopped");
        Ok(())
    }
}
