// src/core/output.rs

//! ANSI color helpers for user-facing terminal output.
//!
//! Command results and diagnostics are written to stdout; operational events
//! go through `tracing` instead.

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Prints a success line in green.
pub fn print_ok(msg: impl AsRef<str>) {
    println!("{GREEN}{}{RESET}", msg.as_ref());
}

/// Prints a diagnostic line in red.
pub fn print_err(msg: impl AsRef<str>) {
    println!("{RED}{}{RESET}", msg.as_ref());
}
