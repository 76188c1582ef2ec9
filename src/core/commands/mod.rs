// src/core/commands/mod.rs

//! Statement building and execution: the keyword executor, the pure SQL
//! builders, the transaction state machine, the result renderer, the CSV
//! exporter, and the SQL-file runner.

pub mod executor;
pub mod export;
pub mod render;
pub mod script;
pub mod statements;
pub mod transaction;
