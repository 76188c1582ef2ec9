// src/repl.rs

//! The interactive loop: prompt, read, dispatch, record.

use crate::core::context::AppContext;
use crate::core::dispatch::router;
use crate::core::output;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the interactive command loop until end-of-input or the quit command.
pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    if ctx.config.metrics.enabled {
        output::print_ok(format!(
            "Stats for nerds!: http://localhost:{}/metrics",
            ctx.config.metrics.port
        ));
    }
    output::print_err(":qa! - EXIT");
    println!("---------------------");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("luna> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case(":qa!") {
            break;
        }
        router::dispatch(&ctx, &input).await;
        ctx.history.record(&input);
    }

    println!("---------------------");
    Ok(())
}
