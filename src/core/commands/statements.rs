// src/core/commands/statements.rs

//! Pure SQL statement builders.
//!
//! Every builder composes a literal SQL string by direct textual
//! concatenation of its arguments. Callers are trusted; nothing here is
//! parameterized or escaped, which is why the executing entry points on the
//! session are named `raw_*`. The parameterized capability lives separately
//! on [`crate::core::session::Session::execute_params`].

use crate::core::session::SessionTarget;

pub fn create_table(table: &str, columns: &str) -> String {
    format!("CREATE TABLE {table} ({columns})")
}

pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE {table}")
}

pub fn create_schema(schema: &str) -> String {
    format!("CREATE SCHEMA {schema}")
}

pub fn insert_into(table: &str, values: &str) -> String {
    format!("INSERT INTO {table} VALUES ({values})")
}

pub fn select_from(table: &str, condition: &str) -> String {
    if condition.is_empty() {
        format!("SELECT * FROM {table}")
    } else {
        format!("SELECT * FROM {table} WHERE {condition}")
    }
}

pub fn update(table: &str, set_clause: &str, condition: &str) -> String {
    if condition.is_empty() {
        format!("UPDATE {table} SET {set_clause}")
    } else {
        format!("UPDATE {table} SET {set_clause} WHERE {condition}")
    }
}

pub fn delete_from(table: &str, condition: &str) -> String {
    if condition.is_empty() {
        format!("DELETE FROM {table}")
    } else {
        format!("DELETE FROM {table} WHERE {condition}")
    }
}

pub fn call_procedure(procedure: &str) -> String {
    format!("CALL {procedure}")
}

pub fn call_function(function: &str) -> String {
    format!("SELECT {function}")
}

/// Splits an `update` tail into the SET clause and an optional condition at
/// the first literal `where` token. Keyword matching only; no SQL parsing.
pub fn split_condition(tail: &str) -> (String, String) {
    let tokens: Vec<&str> = tail.split_whitespace().collect();
    if let Some(pos) = tokens.iter().position(|t| t.eq_ignore_ascii_case("where")) {
        (tokens[..pos].join(" "), tokens[pos + 1..].join(" "))
    } else {
        (tokens.join(" "), String::new())
    }
}

/// Argument vector for `pg_dump`, using the live session's credentials.
pub fn backup_args(target: &SessionTarget, file_path: &str) -> Vec<String> {
    vec![
        "-h".into(),
        target.host.clone(),
        "-p".into(),
        target.port.to_string(),
        "-U".into(),
        target.username.clone(),
        "-d".into(),
        target.database.clone(),
        "-f".into(),
        file_path.to_string(),
    ]
}

/// Argument vector for `psql`, using the live session's credentials.
pub fn restore_args(target: &SessionTarget, file_path: &str) -> Vec<String> {
    backup_args(target, file_path)
}
