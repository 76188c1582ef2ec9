// src/server/mod.rs

//! Process orchestration: wires up the shared context, the scheduler worker,
//! the telemetry tasks, and the interactive loop.

use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::scheduler;
use crate::repl;
use anyhow::Result;
use tokio::sync::broadcast;

mod metrics_server;
mod sampler;

/// The main startup function. Runs until the interactive loop exits, then
/// shuts the background tasks down and closes the session.
pub async fn run(config: Config) -> Result<()> {
    let (ctx, schedule_rx) = AppContext::new(config);
    let (shutdown_tx, _) = broadcast::channel(1);

    scheduler::spawn_worker(ctx.clone(), schedule_rx);

    if ctx.config.metrics.enabled {
        tokio::spawn(metrics_server::run_metrics_server(
            ctx.clone(),
            shutdown_tx.subscribe(),
        ));
        tokio::spawn(sampler::run_sampler(ctx.clone(), shutdown_tx.subscribe()));
    }

    repl::run(ctx.clone()).await?;

    let _ = shutdown_tx.send(());
    if let Some(session) = ctx.session.lock().await.take() {
        session.close().await;
    }
    Ok(())
}
