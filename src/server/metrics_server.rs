// src/server/metrics_server.rs

use crate::core::context::AppContext;
use crate::core::metrics::{self, gather_metrics};
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Handles HTTP requests to the /metrics endpoint.
///
/// It refreshes the history gauge before gathering all registered metrics
/// and encoding them in the Prometheus text format.
async fn metrics_handler(ctx: Arc<AppContext>) -> impl IntoResponse {
    metrics::COMMAND_HISTORY_SIZE.set(ctx.history.len() as f64);

    let body = gather_metrics();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
}

/// Runs a simple HTTP server to expose Prometheus metrics on /metrics.
pub async fn run_metrics_server(ctx: Arc<AppContext>, mut shutdown_rx: broadcast::Receiver<()>) {
    let port = ctx.config.metrics.port;
    let app = Router::new().route("/metrics", get(move || metrics_handler(ctx.clone())));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(
        "Prometheus metrics server listening on http://{}/metrics",
        addr
    );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind metrics server on port {}: {}", port, e);
            return;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.recv().await.ok();
            info!("Metrics server shutting down.");
        })
        .await
        .unwrap();
}
