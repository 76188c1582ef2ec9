// src/core/commands/script.rs

//! The SQL-file runner: executes a script file statement by statement inside
//! a single transaction.
//!
//! Lines accumulate into a statement buffer until one ends with `;`. The
//! whole file runs with autocommit off: one commit at end-of-file, one
//! rollback if any statement fails mid-file. A failure to read the file is
//! reported by the caller and does not roll anything back, because it
//! happens before the transaction opens.

use crate::core::errors::LunaError;
use crate::core::session::Session;
use std::path::Path;
use tracing::warn;

/// Splits script contents into `;`-terminated statements. Empty lines are
/// skipped; a trailing unterminated buffer is dropped.
pub fn split_statements(contents: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut buffer = String::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        buffer.push_str(line);
        buffer.push(' ');
        if line.ends_with(';') {
            statements.push(buffer.trim().to_string());
            buffer.clear();
        }
    }
    statements
}

/// Reads and executes a SQL script file on the open session.
pub async fn execute_sql_file(session: &mut Session, path: &Path) -> Result<(), LunaError> {
    // Read errors propagate before the transaction opens.
    let contents = std::fs::read_to_string(path)?;

    session.raw_batch("BEGIN").await?;
    session.autocommit = false;

    for statement in split_statements(&contents) {
        println!("Executing SQL: {statement}");
        match session.raw_query(&statement).await {
            Ok(output) => {
                if !output.columns.is_empty() {
                    println!("{}", output.columns.join("\t"));
                    for row in &output.rows {
                        let cells: Vec<&str> =
                            row.iter().map(|c| c.as_deref().unwrap_or("NULL")).collect();
                        println!("{}", cells.join("\t"));
                    }
                }
            }
            Err(e) => {
                if let Err(rollback_err) = session.raw_batch("ROLLBACK").await {
                    warn!("rollback after script failure also failed: {rollback_err}");
                }
                session.autocommit = true;
                return Err(e);
            }
        }
    }

    session.raw_batch("COMMIT").await?;
    session.autocommit = true;
    println!("SQL file executed successfully.");
    Ok(())
}
