//! Liveness endpoint for external health checks

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

pub const LIVENESS_BODY: &str = "Bot running";

pub fn build_app() -> Router {
    Router::new().route("/", get(|| async { LIVENESS_BODY }))
}

/// Bind the liveness listener on all interfaces
pub async fn bind(port: u16) -> Result<TcpListener, String> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    TcpListener::bind(addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => {
            format!("Failed to bind to {}: Address already in use", addr)
        }
        std::io::ErrorKind::PermissionDenied => {
            format!(
                "Failed to bind to {}: Permission denied. Consider a port above 1024.",
                addr
            )
        }
        _ => format!("Failed to bind to {}: {}", addr, e),
    })
}

/// Serve until the process exits
pub async fn serve(listener: TcpListener) {
    match listener.local_addr() {
        Ok(addr) => info!("Bot server up on http://{}", addr),
        Err(e) => error!("Liveness listener has no local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, build_app()).await {
        error!("Liveness server error: {}", e);
    }
}
