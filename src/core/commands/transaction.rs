// src/core/commands/transaction.rs

//! The transaction state machine for the shared session.
//!
//! Two states, derived from the session's autocommit flag: `NO_TRANSACTION`
//! (autocommit on) and `IN_TRANSACTION` (autocommit off). The transitions
//! are planned by pure functions, each returning the statement to run and
//! the next autocommit flag; the async wrappers execute the plan on the
//! open session. `commit` returns the machine to `NO_TRANSACTION`, so a
//! second `commit` without a new `begin` fails with "no active transaction"
//! instead of silently committing nothing.

use crate::core::errors::LunaError;
use crate::core::session::Session;

fn open_session(session: &mut Option<Session>) -> Result<&mut Session, LunaError> {
    match session {
        Some(s) if s.is_open() => Ok(s),
        _ => Err(LunaError::no_session()),
    }
}

/// Plans a `begin`. Inside a transaction there is nothing to issue; the
/// engine treats a repeated `BEGIN` as a warning-level no-op anyway.
pub fn plan_begin(autocommit: bool) -> (Option<&'static str>, bool) {
    if autocommit {
        (Some("BEGIN"), false)
    } else {
        (None, false)
    }
}

/// Plans a `commit`. Outside a transaction there is nothing to commit, and
/// the error says so rather than silently succeeding.
pub fn plan_commit(autocommit: bool) -> Result<(&'static str, bool), LunaError> {
    if autocommit {
        return Err(LunaError::ConnectionState(
            "no active transaction".to_string(),
        ));
    }
    Ok(("COMMIT", true))
}

/// Plans a `rollback`. Outside a transaction the engine treats `ROLLBACK`
/// as a warning-level no-op, which is not surfaced as an error here.
pub fn plan_rollback() -> (&'static str, bool) {
    ("ROLLBACK", true)
}

/// Starts a transaction. Fails with a connection error when no session is
/// open.
pub async fn begin(session: &mut Option<Session>) -> Result<&'static str, LunaError> {
    let session = open_session(session)?;
    let (statement, next) = plan_begin(session.autocommit);
    if let Some(statement) = statement {
        session.raw_batch(statement).await?;
    }
    session.autocommit = next;
    Ok("Transaction started.")
}

/// Commits the current transaction. Requires an open session that is
/// `IN_TRANSACTION`.
pub async fn commit(session: &mut Option<Session>) -> Result<&'static str, LunaError> {
    let session = open_session(session)?;
    let (statement, next) = plan_commit(session.autocommit)?;
    session.raw_batch(statement).await?;
    session.autocommit = next;
    Ok("Transaction committed successfully.")
}

/// Rolls back the current transaction on the open session.
pub async fn rollback(session: &mut Option<Session>) -> Result<&'static str, LunaError> {
    let session = open_session(session)?;
    let (statement, next) = plan_rollback();
    session.raw_batch(statement).await?;
    session.autocommit = next;
    Ok("Transaction rolled back successfully.")
}
