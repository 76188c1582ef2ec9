// src/core/history.rs

//! The in-memory, append-only command history.
//!
//! Every raw input line is recorded after dispatch. The `history` keyword
//! dumps the sequence, and the telemetry sampler reads the count. Nothing
//! is persisted across restarts.

use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Mutex<Vec<String>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw input line to the history.
    pub fn record(&self, line: &str) {
        self.entries.lock().push(line.to_string());
    }

    /// The number of recorded commands, for the telemetry gauge.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns the history formatted as `index. command` lines, oldest first.
    pub fn dump(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}. {}", i + 1, cmd))
            .collect()
    }
}
