// src/core/context.rs

//! The process-wide application context shared by the interactive loop, the
//! scheduler worker, and the metrics server.

use crate::config::Config;
use crate::core::history::CommandHistory;
use crate::core::profiles::ProfileStore;
use crate::core::scheduler::ScheduledCommand;
use crate::core::session::Session;
use crate::core::snippets::SnippetStore;
use std::sync::Arc;
use std::sync::atomic::AtomicU16;
use tokio::sync::{Mutex, mpsc};

/// Shared state for one CLI process.
///
/// The session is the single shared mutable resource; it lives behind a
/// `tokio::sync::Mutex` so that interactive commands and scheduled commands
/// are serialized rather than racing on the connection's transaction state.
pub struct AppContext {
    pub config: Config,
    pub session: Mutex<Option<Session>>,
    /// The port new sessions connect to; mutable at runtime via `luna port`.
    pub current_port: AtomicU16,
    pub history: CommandHistory,
    pub profiles: ProfileStore,
    pub snippets: SnippetStore,
    /// Submission side of the single shared scheduler queue.
    pub schedule_tx: mpsc::UnboundedSender<ScheduledCommand>,
}

impl AppContext {
    /// Builds the context and the receiving end of the scheduler queue. The
    /// caller hands the receiver to [`crate::core::scheduler::spawn_worker`].
    pub fn new(config: Config) -> (Arc<Self>, mpsc::UnboundedReceiver<ScheduledCommand>) {
        let (schedule_tx, schedule_rx) = mpsc::unbounded_channel();
        let ctx = Arc::new(Self {
            current_port: AtomicU16::new(config.port),
            history: CommandHistory::new(),
            profiles: ProfileStore::new(config.stores.profiles_path.clone()),
            snippets: SnippetStore::new(config.stores.snippets_path.clone()),
            session: Mutex::new(None),
            schedule_tx,
            config,
        });
        (ctx, schedule_rx)
    }
}
