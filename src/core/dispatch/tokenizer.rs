// src/core/dispatch/tokenizer.rs

//! Splits raw input lines into tokens and extracts `key:value` parameters.
//!
//! Tokens are whitespace-delimited. A parameter is any token containing a
//! `:`; the key is the prefix up to the first `:`, the last occurrence of a
//! key wins. Quoted values are unwrapped only when both a leading and a
//! trailing quote are present. Embedded delimiters are not escapable; that
//! is a known limitation of the command grammar, not something this module
//! papers over.

use std::collections::HashMap;

/// Splits a raw line into whitespace-delimited tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Strips a single leading/trailing `"` pair, only when both are present.
pub fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Extracts `key:value` parameters from `tokens[start..]`. Tokens without a
/// `:` are ignored on this path.
pub fn extract_params(tokens: &[String], start: usize) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for token in tokens.iter().skip(start) {
        if let Some((key, value)) = token.split_once(':') {
            params.insert(key.to_string(), unquote(value).to_string());
        }
    }
    params
}

/// The result of a greedy `command:` capture.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captured {
    /// The reassembled command text, space-joined and trimmed.
    pub command: String,
    /// The terminating parameters seen alongside it (`delay`, `unit`, `export`).
    pub params: HashMap<String, String>,
}

/// Walks the tokens of a `schedule`/`out` style line. `command:` opens the
/// capture; every unlabeled token is concatenated onto the command text
/// until a `delay:`, `unit:`, or `export:` parameter closes it.
pub fn capture_command(tokens: &[String]) -> Captured {
    let mut captured = Captured::default();
    let mut parts: Vec<&str> = Vec::new();
    let mut capturing = false;

    for token in tokens {
        if let Some(rest) = token.strip_prefix("command:") {
            capturing = true;
            parts.push(rest);
        } else if let Some(value) = terminator(token) {
            let (key, value) = value;
            captured.params.insert(key.to_string(), value.to_string());
            capturing = false;
        } else if capturing {
            parts.push(token);
        }
    }

    captured.command = parts.join(" ").trim().to_string();
    captured
}

fn terminator(token: &str) -> Option<(&str, &str)> {
    for key in ["delay", "unit", "export"] {
        if let Some(value) = token.strip_prefix(key).and_then(|t| t.strip_prefix(':')) {
            return Some((key, value));
        }
    }
    None
}
