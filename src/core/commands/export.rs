// src/core/commands/export.rs

//! CSV export: runs a caller-supplied query and streams the result set to a
//! file.
//!
//! The format is a header line of column names followed by one
//! comma-terminated line per row. Embedded commas are not quoted or escaped
//! (known limitation), and SQL nulls are written as the literal `null`.

use crate::core::errors::LunaError;
use crate::core::session::{QueryOutput, Session};
use std::path::Path;

/// Serializes a result set into the exporter's CSV shape.
pub fn csv_lines(output: &QueryOutput) -> String {
    let mut out = String::new();
    for column in &output.columns {
        out.push_str(column);
        out.push(',');
    }
    out.push('\n');
    for row in &output.rows {
        for cell in row {
            out.push_str(cell.as_deref().unwrap_or("null"));
            out.push(',');
        }
        out.push('\n');
    }
    out
}

/// Executes `query` on the open session and writes the CSV file at `path`.
pub async fn export_to_csv(
    session: &Session,
    query: &str,
    path: &Path,
) -> Result<(), LunaError> {
    let output = session.raw_query(query).await?;
    std::fs::write(path, csv_lines(&output))?;
    Ok(())
}
