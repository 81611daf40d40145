//! Process signal helpers shared by the binaries.

use tracing::{info, warn};

/// Resolves once Ctrl+C is received. If the handler cannot be installed the
/// future never resolves, so the server keeps running instead of exiting.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(event = "signal_handler_failed", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}
