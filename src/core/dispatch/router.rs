// src/core/dispatch/router.rs

//! The two-level command router.
//!
//! The first token selects the namespace (only `luna` exists); the second
//! selects an operation from a fixed table. Unrecognized operations fall
//! through: with an open session the remainder of the line is forwarded
//! verbatim as raw SQL, otherwise an "Unknown Command" diagnostic is
//! printed. A line that does not start with `luna` at all — batch fragments
//! and stored snippets take this path — is forwarded as raw SQL when a
//! session is open.
//!
//! No handler error escapes this module: every failure is caught, printed,
//! and the interactive loop continues.

use crate::core::commands::executor;
use crate::core::context::AppContext;
use crate::core::dispatch::{batch, tokenizer};
use crate::core::errors::LunaError;
use crate::core::metrics;
use crate::core::output;
use crate::core::scheduler;
use crate::core::session::Session;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use strum_macros::EnumString;
use tracing::debug;

/// The operations of the `luna` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Verb {
    Connect,
    Entityc,
    Entityl,
    Entityg,
    Clone,
    Port,
    Info,
    Schedule,
    Out,
    Run,
    Multiple,
    Snippetc,
    Snippetl,
    Snippetg,
}

/// Dispatches one raw input line. All failures are printed here; the caller
/// always gets control back.
pub async fn dispatch(ctx: &Arc<AppContext>, line: &str) {
    metrics::COMMANDS_PROCESSED_TOTAL.inc();
    if let Err(e) = route(ctx, line).await {
        output::print_err(format!("Error: {e}"));
    }
}

async fn route(ctx: &Arc<AppContext>, line: &str) -> Result<(), LunaError> {
    let tokens = tokenizer::tokenize(line);
    let Some(first) = tokens.first() else {
        return Err(LunaError::ParameterCount("command".to_string()));
    };

    if !first.eq_ignore_ascii_case("luna") {
        // Batch fragments and snippet bodies re-enter here without the
        // namespace token.
        return forward_raw(ctx, line).await;
    }
    // A bare `luna` with no sub-verb is a parameter-count diagnostic.
    if tokens.len() < 2 {
        return Err(LunaError::ParameterCount("luna".to_string()));
    }

    let sub = tokens[1].to_lowercase();
    match Verb::from_str(&sub) {
        Ok(Verb::Connect) => handle_connect(ctx, &tokens).await,
        Ok(Verb::Entityc) => handle_entityc(ctx, &tokens),
        Ok(Verb::Entityl) => handle_entityl(ctx, &tokens),
        Ok(Verb::Entityg) => handle_entityg(ctx, &tokens),
        Ok(Verb::Clone) => handle_clone(ctx, &tokens).await,
        Ok(Verb::Port) => handle_port(ctx, &tokens).await,
        Ok(Verb::Info) => handle_info(ctx).await,
        Ok(Verb::Schedule) => handle_schedule(ctx, &tokens),
        Ok(Verb::Out) => handle_out(ctx, &tokens).await,
        Ok(Verb::Run) => handle_run(ctx, &tokens).await,
        Ok(Verb::Multiple) => handle_multiple(ctx, line).await,
        Ok(Verb::Snippetc) => handle_snippetc(ctx, &tokens),
        Ok(Verb::Snippetl) => handle_snippetl(ctx),
        Ok(Verb::Snippetg) => handle_snippetg(ctx, &tokens).await,
        Err(_) => {
            // Unknown sub-verb: forward the remainder of the line (the raw
            // text after the namespace token) as a SQL command.
            if session_open(ctx).await {
                executor::execute_raw(ctx, &tokens[1..].join(" ")).await
            } else {
                output::print_err("Unknown Command");
                Ok(())
            }
        }
    }
}

async fn forward_raw(ctx: &Arc<AppContext>, line: &str) -> Result<(), LunaError> {
    if session_open(ctx).await {
        executor::execute_raw(ctx, line).await
    } else {
        output::print_err("Invalid Command");
        Ok(())
    }
}

async fn session_open(ctx: &AppContext) -> bool {
    matches!(&*ctx.session.lock().await, Some(s) if s.is_open())
}

// --- Connection management ---

async fn handle_connect(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 4 {
        return Err(LunaError::ParameterCount("connect".to_string()));
    }
    let db_type = tokens[2].to_lowercase();
    if db_type != "postgresql" {
        output::print_err(format!("Unsupported Database: {db_type}"));
        return Ok(());
    }

    let params = tokenizer::extract_params(tokens, 3);
    let (Some(username), Some(password), Some(database)) = (
        params.get("username"),
        params.get("password"),
        params.get("database"),
    ) else {
        output::print_err("Connection Failed");
        return Ok(());
    };

    let mut guard = ctx.session.lock().await;
    if let Some(existing) = guard.as_ref() {
        if existing.is_open() {
            output::print_err(format!("Already connected to: {}", existing.target.database));
            return Ok(());
        }
    }

    let port = ctx.current_port.load(Ordering::Relaxed);
    match Session::connect(&ctx.config.host, port, username, password, database).await {
        Ok(session) => {
            *guard = Some(session);
            output::print_ok("Connected to database: PostgreSQL");
        }
        Err(e) => output::print_err(format!("Connection Error: {e}")),
    }
    Ok(())
}

async fn handle_port(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 3 {
        return Err(LunaError::ParameterCount("port".to_string()));
    }
    let value = tokens[2].strip_prefix("port:").unwrap_or(&tokens[2]);
    let new_port: u16 = value
        .parse()
        .map_err(|_| LunaError::Configuration(format!("Invalid port: {value}")))?;
    if new_port < 1024 {
        return Err(LunaError::Configuration(format!(
            "Port out of range (1024-65535): {new_port}"
        )));
    }

    ctx.current_port.store(new_port, Ordering::Relaxed);
    println!("PORT has been changed: {new_port}");

    // A port change invalidates the live session.
    if let Some(session) = ctx.session.lock().await.take() {
        session.close().await;
        output::print_ok("Database connection closed.");
    }
    Ok(())
}

async fn handle_info(ctx: &Arc<AppContext>) -> Result<(), LunaError> {
    let guard = ctx.session.lock().await;
    let port = ctx.current_port.load(Ordering::Relaxed);
    let (database, connected) = match guard.as_ref() {
        Some(s) if s.is_open() => (s.target.database.clone(), true),
        _ => ("postgresql".to_string(), false),
    };
    println!("Database Information:");
    println!("---------------------");
    println!("DATABASE NAME: {database}");
    println!("PORT: {port}");
    println!("BASE_URL: postgresql://{}:{port}/", ctx.config.host);
    println!(
        "Connection Status: {}",
        if connected { "Connected" } else { "Not Connected" }
    );
    Ok(())
}

// --- Saved profiles ---

fn handle_entityc(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 4 {
        return Err(LunaError::ParameterCount("entityc".to_string()));
    }
    let params = tokenizer::extract_params(tokens, 2);
    let (Some(username), Some(password), Some(database)) = (
        params.get("username"),
        params.get("password"),
        params.get("database"),
    ) else {
        output::print_err("Invalid save parameters.");
        return Ok(());
    };
    let profile = ctx.profiles.save_profile(username, password, database)?;
    println!("User saved: {}", profile.id);
    Ok(())
}

fn handle_entityl(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 3 || !tokens[2].eq_ignore_ascii_case("users") {
        return Err(LunaError::ParameterCount("entityl".to_string()));
    }
    let profiles = ctx.profiles.load()?;
    if profiles.is_empty() {
        println!("[]");
    }
    for profile in profiles {
        println!("{profile}");
    }
    Ok(())
}

fn handle_entityg(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 3 {
        return Err(LunaError::ParameterCount("entityg".to_string()));
    }
    let params = tokenizer::extract_params(tokens, 2);
    let Some(user_id) = params.get("user") else {
        output::print_err("Invalid user retrieval parameters.");
        return Ok(());
    };
    match ctx.profiles.get(user_id)? {
        Some(profile) => output::print_ok(format!("User found: {profile}")),
        None => output::print_err("User not found."),
    }
    Ok(())
}

async fn handle_clone(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 3 {
        return Err(LunaError::ParameterCount("clone".to_string()));
    }
    let params = tokenizer::extract_params(tokens, 2);
    let Some(user_id) = params.get("user") else {
        output::print_err("Invalid user retrieval parameters.");
        return Ok(());
    };
    let profile = ctx
        .profiles
        .get(user_id)?
        .ok_or_else(|| LunaError::NotFound(format!("profile '{user_id}'")))?;

    let mut guard = ctx.session.lock().await;
    if let Some(existing) = guard.take() {
        existing.close().await;
        debug!("closed previous session before clone connect");
    }
    let port = ctx.current_port.load(Ordering::Relaxed);
    match Session::connect(
        &ctx.config.host,
        port,
        &profile.username,
        &profile.password,
        &profile.database,
    )
    .await
    {
        Ok(session) => {
            *guard = Some(session);
            output::print_ok(format!("Successfully connected: {}", profile.id));
        }
        Err(e) => output::print_err(format!("Connection Error: {e}")),
    }
    Ok(())
}

// --- Scheduling, export, script execution, batches ---

fn handle_schedule(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 4 {
        return Err(LunaError::ParameterCount("schedule".to_string()));
    }
    let captured = tokenizer::capture_command(tokens);
    let delay: u64 = parse_numeric(captured.params.get("delay"), "delay")?;
    let unit: u32 = parse_numeric(captured.params.get("unit"), "unit")?;
    if captured.command.is_empty() || delay == 0 || unit == 0 {
        return Err(LunaError::ParameterCount("schedule".to_string()));
    }
    scheduler::submit(ctx, captured.command, delay, unit)
}

fn parse_numeric<T: FromStr>(value: Option<&String>, key: &str) -> Result<T, LunaError> {
    let Some(value) = value else {
        return Err(LunaError::ParameterCount(key.to_string()));
    };
    value
        .parse()
        .map_err(|_| LunaError::Configuration(format!("Invalid {key}: {value}")))
}

async fn handle_out(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 3 {
        return Err(LunaError::ParameterCount("out".to_string()));
    }
    let captured = tokenizer::capture_command(tokens);
    let Some(export) = captured.params.get("export").filter(|e| !e.is_empty()) else {
        return Err(LunaError::ParameterCount("out".to_string()));
    };
    if captured.command.is_empty() {
        return Err(LunaError::ParameterCount("out".to_string()));
    }
    println!("Export: {export}");
    println!("Commands: {}", captured.command);

    let path = PathBuf::from(&ctx.config.export_dir).join(export);
    let guard = ctx.session.lock().await;
    executor::run_csv_export(guard, &captured.command, &path).await?;
    output::print_ok(format!("Data successfully exported to {}", path.display()));
    Ok(())
}

async fn handle_run(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    if tokens.len() < 3 {
        return Err(LunaError::ParameterCount("run".to_string()));
    }
    let params = tokenizer::extract_params(tokens, 2);
    let Some(file_path) = params.get("filepath").filter(|p| !p.is_empty()) else {
        return Err(LunaError::Configuration(
            "File path is missing. Use 'filepath:<path-to-file>' format.".to_string(),
        ));
    };
    let path = PathBuf::from(file_path);
    if !path.is_file() {
        return Err(LunaError::NotFound(format!(
            "SQL file not found at path: {file_path}"
        )));
    }
    let guard = ctx.session.lock().await;
    executor::run_sql_file(guard, &path).await
}

async fn handle_multiple(ctx: &Arc<AppContext>, line: &str) -> Result<(), LunaError> {
    let fragments = batch::split_batches(line);
    // Fragments run sequentially and independently: one failure is reported
    // by the nested dispatch and does not stop the rest.
    for fragment in fragments {
        println!("Executing SQL: {fragment}");
        Box::pin(dispatch(ctx, &fragment)).await;
    }
    Ok(())
}

// --- Snippets ---

fn handle_snippetc(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    let mut name = String::new();
    let mut command = String::new();
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if let Some(value) = token.strip_prefix("name:") {
            name = value.trim().to_string();
        } else if let Some(first) = token.strip_prefix("command:") {
            // The command text is captured greedily to the end of the line.
            let mut parts = vec![first.to_string()];
            parts.extend(iter.by_ref().cloned());
            command = parts.join(" ").trim().to_string();
        }
    }
    if name.is_empty() || command.is_empty() {
        return Err(LunaError::ParameterCount("snippetc".to_string()));
    }
    let entry = ctx.snippets.save_snippet(&name, &command)?;
    output::print_ok(format!("Snippet saved: {}", entry.id));
    Ok(())
}

fn handle_snippetl(ctx: &Arc<AppContext>) -> Result<(), LunaError> {
    let snippets = ctx.snippets.load()?;
    if snippets.is_empty() {
        println!("[]");
    }
    for snippet in snippets {
        println!("{snippet}");
    }
    Ok(())
}

async fn handle_snippetg(ctx: &Arc<AppContext>, tokens: &[String]) -> Result<(), LunaError> {
    let params = tokenizer::extract_params(tokens, 2);
    let id: u64 = parse_numeric(params.get("id"), "id")?;
    let entry = ctx
        .snippets
        .get(id)?
        .ok_or_else(|| LunaError::NotFound(format!("snippet '{id}'")))?;
    // Re-enter the router with the stored raw text, byte for byte.
    Box::pin(dispatch(ctx, &entry.value)).await;
    output::print_ok(format!("Executed snippet: {id}"));
    Ok(())
}
