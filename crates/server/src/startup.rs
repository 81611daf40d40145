use std::{future::Future, net::SocketAddr};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a fresh in-memory store, ready to serve.
pub fn build_app() -> Router {
    routes::build_router(AppState::in_memory(), build_cors())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app from an already validated config and run the
/// HTTP server until Ctrl+C.
pub async fn run(cfg: &configs::AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, "blog api listening");

    serve(listener, build_app(), common::signal::shutdown_signal()).await?;
    info!(%addr, "blog api stopped accepting connections");
    Ok(())
}
