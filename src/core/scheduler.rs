// src/core/scheduler.rs

//! Deferred command execution.
//!
//! A submission sleeps out its delay on its own timer task, then lands on a
//! single shared worker queue. The worker re-enters the router one command
//! at a time, so scheduled commands are serialized relative to each other
//! while running concurrently with the interactive loop. Once submitted, a
//! command cannot be cancelled, and nothing survives a process restart.

use crate::core::context::AppContext;
use crate::core::dispatch::router;
use crate::core::errors::LunaError;
use crate::core::metrics;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// A command text queued for one-shot execution after a delay.
#[derive(Debug, Clone)]
pub struct ScheduledCommand {
    pub command: String,
    pub delay: u64,
    pub unit: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Maps a unit selector to a duration: `1` seconds, `2` minutes, `3` hours.
/// An unknown unit or a delay too large to express in seconds is a
/// configuration error, reported immediately rather than deferred.
pub fn delay_for(delay: u64, unit: u32) -> Result<Duration, LunaError> {
    let seconds = match unit {
        1 => Some(delay),
        2 => delay.checked_mul(60),
        3 => delay.checked_mul(3600),
        _ => {
            return Err(LunaError::Configuration(
                "Invalid time unit. Use 1 (Seconds), 2 (Minutes), or 3 (Hours).".to_string(),
            ));
        }
    };
    seconds
        .map(Duration::from_secs)
        .ok_or_else(|| LunaError::Configuration(format!("Delay too large: {delay}")))
}

/// Validates the unit and schedules the command. The timer task enqueues the
/// text on the shared worker queue after the delay elapses.
pub fn submit(ctx: &AppContext, command: String, delay: u64, unit: u32) -> Result<(), LunaError> {
    let wait = delay_for(delay, unit)?;
    let scheduled = ScheduledCommand {
        command,
        delay,
        unit,
        submitted_at: Utc::now(),
    };
    info!(
        "scheduled command \"{}\" to run in {:?}",
        scheduled.command, wait
    );
    let tx = ctx.schedule_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        // The receiver only drops at shutdown; a failed send means the
        // process is already exiting.
        let _ = tx.send(scheduled);
    });
    Ok(())
}

/// Spawns the single scheduler worker. It drains the queue sequentially and
/// re-enters the router with each stored command text.
pub fn spawn_worker(
    ctx: Arc<AppContext>,
    mut rx: mpsc::UnboundedReceiver<ScheduledCommand>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(scheduled) = rx.recv().await {
            println!("Executing scheduled command: {}", scheduled.command);
            info!(
                "running command submitted at {}",
                scheduled.submitted_at.to_rfc3339()
            );
            metrics::SCHEDULED_COMMANDS_TOTAL.inc();
            router::dispatch(&ctx, &scheduled.command).await;
        }
    })
}
