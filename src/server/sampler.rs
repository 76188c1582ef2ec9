// src/server/sampler.rs

//! Periodically samples process-level CPU, memory, and load for telemetry.

use crate::core::context::AppContext;
use crate::core::metrics;
use std::sync::Arc;
use std::time::Duration;
use sysinfo::System;
use tokio::sync::broadcast;
use tracing::info;

/// Refreshes the system gauges on the configured poll interval until
/// shutdown is signalled.
pub async fn run_sampler(ctx: Arc<AppContext>, mut shutdown_rx: broadcast::Receiver<()>) {
    let mut sys = System::new();
    let mut interval =
        tokio::time::interval(Duration::from_secs(ctx.config.metrics.poll_interval_secs));
    info!("System sampler task started.");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                sample(&mut sys, &ctx);
            }
            _ = shutdown_rx.recv() => {
                info!("System sampler task shutting down.");
                return;
            }
        }
    }
}

fn sample(sys: &mut System, ctx: &AppContext) {
    sys.refresh_memory();
    sys.refresh_cpu_usage();

    let used_mb = sys.used_memory() as f64 / (1024.0 * 1024.0);
    metrics::MEMORY_USED_MB.set(used_mb);

    // CPU usage needs two refreshes to be meaningful; the first tick reads 0.
    metrics::CPU_USAGE_PERCENT.set(sys.global_cpu_usage() as f64);

    let load = System::load_average();
    if load.one >= 0.0 {
        metrics::LOAD_AVERAGE.set(load.one);
    }

    metrics::COMMAND_HISTORY_SIZE.set(ctx.history.len() as f64);
}
