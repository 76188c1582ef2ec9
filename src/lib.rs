// src/lib.rs

pub mod config;
pub mod core;
pub mod repl;
pub mod server;

// Re-export
pub use crate::core::LunaError;
