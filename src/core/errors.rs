// src/core/errors.rs

//! Defines the primary error type for the entire application.

use thiserror::Error;

/// The main error enum, representing all failures a command handler can report.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
///
/// Handlers catch their own errors and print the diagnostic; none of these
/// abort the interactive loop.
#[derive(Error, Debug)]
pub enum LunaError {
    /// Too few tokens or required parameters for a verb.
    #[error("Wrong number of parameters for '{0}'")]
    ParameterCount(String),

    /// An operation required a session state (open/closed, in/out of a
    /// transaction) that does not hold.
    #[error("Connection Error: {0}")]
    ConnectionState(String),

    /// The underlying SQL engine rejected a statement.
    #[error("SQL Execution Error: {0}")]
    Engine(String),

    /// Invalid scheduler unit, invalid port range, malformed numeric input.
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// A profile or snippet id is absent, or a script file is missing.
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LunaError {
    /// The connection-state error every transaction operation reports when
    /// no live session exists.
    pub fn no_session() -> Self {
        LunaError::ConnectionState("connection is null or closed".into())
    }
}

impl From<tokio_postgres::Error> for LunaError {
    fn from(e: tokio_postgres::Error) -> Self {
        LunaError::Engine(e.to_string())
    }
}
