// src/core/commands/executor.rs

//! Executes a raw command string against the shared session.
//!
//! The first token is matched against the canonical keyword table; anything
//! unrecognized is forwarded verbatim to the engine as plain SQL. All engine
//! failures are reported to the caller as [`LunaError`] values; nothing here
//! terminates the interpreter.

use crate::core::commands::{export, render, script, statements, transaction};
use crate::core::context::AppContext;
use crate::core::errors::LunaError;
use crate::core::output;
use crate::core::session::{Session, SessionTarget};
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::EnumString;
use tokio::sync::MutexGuard;

/// The canonical command keywords understood by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    BeginTransaction,
    Commit,
    Rollback,
    CallProcedure,
    CallFunction,
    CreateTable,
    DropTable,
    CreateSchema,
    InsertInto,
    SelectFrom,
    Update,
    DeleteFrom,
    BackupDatabase,
    RestoreDatabase,
    History,
    Help,
}

/// Splits a raw command into its leading keyword token and the remainder.
fn split_first(raw: &str) -> (&str, &str) {
    let raw = raw.trim();
    match raw.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (raw, ""),
    }
}

fn first_token<'a>(rest: &'a str, keyword: &str) -> Result<&'a str, LunaError> {
    rest.split_whitespace()
        .next()
        .ok_or_else(|| LunaError::ParameterCount(keyword.to_string()))
}

fn split_pair<'a>(rest: &'a str, keyword: &str) -> Result<(&'a str, &'a str), LunaError> {
    let (head, tail) = split_first(rest);
    if head.is_empty() || tail.is_empty() {
        return Err(LunaError::ParameterCount(keyword.to_string()));
    }
    Ok((head, tail))
}

/// Dispatches one raw command. The session mutex is held for the duration of
/// the engine call, serializing interactive and scheduled statements.
pub async fn execute_raw(ctx: &Arc<AppContext>, raw: &str) -> Result<(), LunaError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LunaError::ParameterCount("command".to_string()));
    }
    let (first, rest) = split_first(raw);

    let mut guard = ctx.session.lock().await;
    match Keyword::from_str(&first.to_lowercase()) {
        Ok(Keyword::History) => {
            for line in ctx.history.dump() {
                println!("{line}");
            }
            Ok(())
        }
        Ok(Keyword::Help) => {
            print_help();
            Ok(())
        }
        Ok(Keyword::BeginTransaction) => {
            let msg = transaction::begin(&mut guard).await?;
            output::print_ok(msg);
            Ok(())
        }
        Ok(Keyword::Commit) => {
            let msg = transaction::commit(&mut guard).await?;
            output::print_ok(msg);
            Ok(())
        }
        Ok(Keyword::Rollback) => {
            let msg = transaction::rollback(&mut guard).await?;
            output::print_ok(msg);
            Ok(())
        }
        Ok(keyword) => {
            let session = match guard.as_mut() {
                Some(s) if s.is_open() => s,
                _ => return Err(LunaError::no_session()),
            };
            run_engine_keyword(session, keyword, first, rest).await
        }
        Err(_) => {
            // Not a canonical keyword: forward verbatim as plain SQL.
            let session = match guard.as_ref() {
                Some(s) if s.is_open() => s,
                _ => return Err(LunaError::no_session()),
            };
            let out = session.raw_query(raw).await?;
            if !out.columns.is_empty() {
                println!("{}", render::render(&out));
            }
            Ok(())
        }
    }
}

async fn run_engine_keyword(
    session: &mut Session,
    keyword: Keyword,
    name: &str,
    rest: &str,
) -> Result<(), LunaError> {
    match keyword {
        Keyword::CallProcedure => {
            let procedure = first_token(rest, name)?;
            session
                .raw_batch(&statements::call_procedure(procedure))
                .await?;
            output::print_ok(format!("Procedure '{procedure}' executed successfully."));
        }
        Keyword::CallFunction => {
            let function = first_token(rest, name)?;
            let out = session.raw_query(&statements::call_function(function)).await?;
            let value = out
                .rows
                .first()
                .and_then(|r| r.first())
                .and_then(|c| c.as_deref())
                .unwrap_or("NULL");
            output::print_ok(format!("Function '{function}' returned: {value}"));
        }
        Keyword::CreateTable => {
            let (table, columns) = split_pair(rest, name)?;
            session.raw_batch(&statements::create_table(table, columns)).await?;
            output::print_ok(format!("Table '{table}' created."));
        }
        Keyword::DropTable => {
            let table = first_token(rest, name)?;
            session.raw_batch(&statements::drop_table(table)).await?;
            output::print_ok(format!("Table '{table}' dropped."));
        }
        Keyword::CreateSchema => {
            let schema = first_token(rest, name)?;
            session.raw_batch(&statements::create_schema(schema)).await?;
            output::print_ok(format!("Schema '{schema}' created."));
        }
        Keyword::InsertInto => {
            let (table, values) = split_pair(rest, name)?;
            session.raw_batch(&statements::insert_into(table, values)).await?;
            output::print_ok("Query executed successfully.");
        }
        Keyword::SelectFrom => {
            let table = first_token(rest, name)?;
            let condition = rest[table.len()..].trim();
            let out = session
                .raw_query(&statements::select_from(table, condition))
                .await?;
            println!("{}", render::render(&out));
        }
        Keyword::Update => {
            let (table, tail) = split_pair(rest, name)?;
            let (set_clause, condition) = statements::split_condition(tail);
            session
                .raw_batch(&statements::update(table, &set_clause, &condition))
                .await?;
            output::print_ok("Query executed successfully.");
        }
        Keyword::DeleteFrom => {
            let table = first_token(rest, name)?;
            let condition = rest[table.len()..].trim();
            session
                .raw_batch(&statements::delete_from(table, condition))
                .await?;
            output::print_ok("Query executed successfully.");
        }
        Keyword::BackupDatabase => {
            let path = first_token(rest, name)?;
            run_engine_tool("pg_dump", &session.target, &statements::backup_args(&session.target, path)).await?;
        }
        Keyword::RestoreDatabase => {
            let path = first_token(rest, name)?;
            run_engine_tool("psql", &session.target, &statements::restore_args(&session.target, path)).await?;
        }
        // Handled before the engine gate.
        Keyword::BeginTransaction
        | Keyword::Commit
        | Keyword::Rollback
        | Keyword::History
        | Keyword::Help => unreachable!("non-engine keyword routed to engine path"),
    }
    Ok(())
}

/// Invokes an external engine tool (`pg_dump`/`psql`) as a subprocess.
/// Success or failure is the exit code only.
async fn run_engine_tool(
    tool: &str,
    target: &SessionTarget,
    args: &[String],
) -> Result<(), LunaError> {
    let status = tokio::process::Command::new(tool)
        .args(args)
        .env("PGPASSWORD", &target.password)
        .status()
        .await?;
    if status.success() {
        output::print_ok("Command executed successfully.");
    } else {
        output::print_err(format!(
            "Command failed with exit code: {}",
            status.code().unwrap_or(-1)
        ));
    }
    Ok(())
}

/// Re-exported for the router's script path so the file runner shares this
/// module's session discipline.
pub async fn run_sql_file(
    mut guard: MutexGuard<'_, Option<Session>>,
    path: &std::path::Path,
) -> Result<(), LunaError> {
    let session = match guard.as_mut() {
        Some(s) if s.is_open() => s,
        _ => return Err(LunaError::no_session()),
    };
    script::execute_sql_file(session, path).await
}

/// Runs a query on the open session and exports the rows as CSV.
pub async fn run_csv_export(
    guard: MutexGuard<'_, Option<Session>>,
    query: &str,
    path: &std::path::Path,
) -> Result<(), LunaError> {
    let session = match guard.as_ref() {
        Some(s) if s.is_open() => s,
        _ => return Err(LunaError::no_session()),
    };
    export::export_to_csv(session, query, path).await
}

fn print_help() {
    println!("Available commands:");
    println!("-----------------------------------------------------");
    output::print_ok("QUERIES");
    println!("- begin-transaction: Start a new transaction.");
    println!("- commit: Commit the current transaction.");
    println!("- rollback: Rollback the current transaction.");
    println!("- call-procedure <procedure_name>: Call a stored procedure.");
    println!("- call-function <function_name>: Call a function.");
    println!("- create-table <table_name> <columns>: Create a new table.");
    println!("- drop-table <table_name>: Drop a table.");
    println!("- create-schema <schema_name>: Create a new schema.");
    println!("- insert-into <table_name> <values>: Insert data into a table.");
    println!("- select-from <table_name> [condition]: Select data from a table.");
    println!("- update <table_name> <set_clause> [condition]: Update data in a table.");
    println!("- delete-from <table_name> [condition]: Delete data from a table.");
    println!("- backup-database <file_path>: Backup the database.");
    println!("- restore-database <file_path>: Restore the database.");
    println!("- history: Display all past commands.");
    println!("- schedule command:<query> delay:<delay> unit:<unit>");
    println!("- out command:<query> export:<file>");
    println!("- run filepath:<sqlFile>");
    output::print_err("- help: Show this help message.");
    println!("-----------------------------------------------------");
    output::print_ok("ENTITY MANAGER");
    println!("- entityc username:<username> password:<password> database:<database> | Save a profile");
    println!("- entityl users | Display all profiles");
    println!("- entityg user:<EntityId> | Get a profile by id");
    println!("- clone user:<EntityId> | Connect with a saved profile");
    output::print_ok("SNIPPET MANAGER");
    println!("- snippetc name:<snippet> command:<snippet code> | Create a snippet");
    println!("- snippetl | Display all snippets");
    println!("- snippetg id:<snippetId> | Execute a snippet by id");
}
