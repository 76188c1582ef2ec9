// src/core/commands/render.rs

//! Formats a tabular result set as fixed-width text.

use crate::core::session::QueryOutput;

/// The message printed instead of a header-only table.
pub const NO_DATA_MESSAGE: &str = "No data found in the table.";

/// Renders a result set. Column width is `max(header length, widest cell)`,
/// null cells render as the literal `NULL`, and a result with zero data rows
/// renders as [`NO_DATA_MESSAGE`] rather than an empty table.
pub fn render(output: &QueryOutput) -> String {
    if output.rows.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut widths: Vec<usize> = output.columns.iter().map(String::len).collect();
    let rows: Vec<Vec<String>> = output
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.clone().unwrap_or_else(|| "NULL".to_string()))
                .collect()
        })
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let separator = separator_line(&widths);
    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&output.columns, &widths));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().copied().enumerate() {
        let cell = cells.get(i).map(AsRef::as_ref).unwrap_or("");
        line.push_str(&format!(" {cell:<width$} |"));
    }
    line
}
