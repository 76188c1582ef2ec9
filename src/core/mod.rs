// src/core/mod.rs

//! The central module containing the core logic and data structures of Luna.

pub mod commands;
pub mod context;
pub mod dispatch;
pub mod errors;
pub mod history;
pub mod metrics;
pub mod output;
pub mod profiles;
pub mod scheduler;
pub mod session;
pub mod snippets;

pub use errors::LunaError;
