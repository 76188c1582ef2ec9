// src/core/metrics.rs

//! Defines and registers Prometheus metrics for the CLI.
//!
//! This module uses `lazy_static` to ensure that metrics are registered only
//! once globally for the entire application lifecycle.

use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, TextEncoder, register_counter, register_gauge};

lazy_static! {
    // --- Counters ---
    /// The total number of command lines dispatched since startup.
    pub static ref COMMANDS_PROCESSED_TOTAL: Counter =
        register_counter!("luna_commands_processed_total", "Total number of commands dispatched.").unwrap();
    /// The total number of deferred commands executed by the scheduler worker.
    pub static ref SCHEDULED_COMMANDS_TOTAL: Counter =
        register_counter!("luna_scheduled_commands_total", "Total number of scheduled commands executed.").unwrap();

    // --- Gauges ---
    /// The current size of the in-memory command history.
    pub static ref COMMAND_HISTORY_SIZE: Gauge =
        register_gauge!("luna_command_history_size", "CLI command history size.").unwrap();
    /// System memory in use, in megabytes.
    pub static ref MEMORY_USED_MB: Gauge =
        register_gauge!("luna_system_memory_usage_mb", "System memory usage in MB.").unwrap();
    /// System-wide CPU usage percentage.
    pub static ref CPU_USAGE_PERCENT: Gauge =
        register_gauge!("luna_system_cpu_usage", "CPU usage percentage.").unwrap();
    /// One-minute system load average.
    pub static ref LOAD_AVERAGE: Gauge =
        register_gauge!("luna_system_load_average", "System load average.").unwrap();
}

/// Gathers all registered metrics and encodes them in the Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode_to_string(&metric_families).unwrap()
}
