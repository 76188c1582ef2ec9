// src/core/session.rs

//! The single live connection to the database engine.
//!
//! At most one `Session` exists at a time; it is owned by the application
//! context behind a `tokio::sync::Mutex`, so interactive and scheduled
//! commands are serialized against the shared connection.

use crate::core::errors::LunaError;
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, SimpleQueryMessage};
use tracing::{info, warn};

/// The identity a session was opened against.
#[derive(Debug, Clone)]
pub struct SessionTarget {
    pub username: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

/// A textual result set as returned by the engine's simple-query protocol.
#[derive(Debug, Clone, Default)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    /// One entry per data row; `None` cells are SQL nulls.
    pub rows: Vec<Vec<Option<String>>>,
}

/// The process-wide database session.
pub struct Session {
    client: Client,
    driver: JoinHandle<()>,
    /// `true` means `NO_TRANSACTION`; `false` means a transaction is open.
    pub autocommit: bool,
    pub target: SessionTarget,
}

impl Session {
    /// Opens a connection to PostgreSQL and spawns the connection driver task.
    pub async fn connect(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        database: &str,
    ) -> Result<Self, LunaError> {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(host)
            .port(port)
            .user(username)
            .password(password)
            .dbname(database);

        let (client, connection) = pg_config.connect(NoTls).await?;
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!("database connection task ended: {e}");
            }
        });
        info!("connected to {host}:{port}/{database} as {username}");

        Ok(Self {
            client,
            driver,
            autocommit: true,
            target: SessionTarget {
                username: username.to_string(),
                password: password.to_string(),
                database: database.to_string(),
                host: host.to_string(),
                port,
            },
        })
    }

    pub fn is_open(&self) -> bool {
        !self.client.is_closed()
    }

    /// Executes raw SQL text with no result set. Trusted-caller path: the
    /// statement is sent verbatim, without parameterization or escaping.
    pub async fn raw_batch(&self, sql: &str) -> Result<(), LunaError> {
        self.client.batch_execute(sql).await?;
        Ok(())
    }

    /// Executes raw SQL text through the simple-query protocol and collects
    /// any rows as strings. Trusted-caller path, like [`Self::raw_batch`].
    pub async fn raw_query(&self, sql: &str) -> Result<QueryOutput, LunaError> {
        let messages = self.client.simple_query(sql).await?;
        let mut out = QueryOutput::default();
        for message in messages {
            match message {
                SimpleQueryMessage::RowDescription(desc) => {
                    out.columns = desc.iter().map(|c| c.name().to_string()).collect();
                }
                SimpleQueryMessage::Row(row) => {
                    if out.columns.is_empty() {
                        out.columns = row.columns().iter().map(|c| c.name().to_string()).collect();
                    }
                    out.rows
                        .push((0..row.len()).map(|i| row.get(i).map(str::to_string)).collect());
                }
                SimpleQueryMessage::CommandComplete(_) => {}
                _ => {}
            }
        }
        Ok(out)
    }

    /// The parameterized-statement capability, kept separate from the raw
    /// path so future callers can opt into engine-side binding.
    pub async fn execute_params(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, LunaError> {
        let affected = self.client.execute(sql, params).await?;
        Ok(affected)
    }

    /// Closes the session and waits for the driver task to finish.
    pub async fn close(self) {
        drop(self.client);
        let _ = self.driver.await;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("autocommit", &self.autocommit)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
