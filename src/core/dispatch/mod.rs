// src/core/dispatch/mod.rs

//! Line dispatch: tokenization, the two-level router, and the batch splitter.

pub mod batch;
pub mod router;
pub mod tokenizer;
