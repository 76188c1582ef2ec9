// src/core/dispatch/batch.rs

//! The batch splitter: extracts parenthesized sub-commands from a composite
//! input line.
//!
//! An explicit non-nested, leftmost-to-rightmost scanner rather than a regex
//! over arbitrary text. Parentheses inside string literals are not treated
//! specially; the command grammar has no escaping for them.

/// Extracts every substring enclosed in a matching `(` `)` pair, trimmed,
/// with empty matches discarded. Scanning resumes after each closing
/// parenthesis, so pairs never nest.
pub fn split_batches(input: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find('(') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(')') else {
            break;
        };
        let fragment = after_open[..close].trim();
        if !fragment.is_empty() {
            fragments.push(fragment.to_string());
        }
        rest = &after_open[close + 1..];
    }

    fragments
}
