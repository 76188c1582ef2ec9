// src/core/snippets.rs

//! The snippet registry: named raw command strings persisted as JSON.
//!
//! `snippetc` appends, `snippetl` lists, `snippetg` looks up by id so the
//! router can re-enter itself with the stored text. There is no update or
//! delete operation.

use crate::core::errors::LunaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A persisted snippet: a sequential id, a name, and the raw command text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnippetEntry {
    pub id: u64,
    pub key: String,
    pub value: String,
}

impl fmt::Display for SnippetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.id, self.key, self.value)
    }
}

/// Key-addressed JSON document holding all snippets.
pub struct SnippetStore {
    path: PathBuf,
}

impl SnippetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full snippet list. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<SnippetEntry>, LunaError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Appends a snippet with an auto-incremented id and persists the list.
    pub fn save_snippet(&self, key: &str, value: &str) -> Result<SnippetEntry, LunaError> {
        let mut snippets = self.load()?;
        let entry = SnippetEntry {
            id: snippets.len() as u64 + 1,
            key: key.to_string(),
            value: value.to_string(),
        };
        snippets.push(entry.clone());
        self.persist(&snippets)?;
        Ok(entry)
    }

    /// Looks a snippet up by id.
    pub fn get(&self, id: u64) -> Result<Option<SnippetEntry>, LunaError> {
        Ok(self.load()?.into_iter().find(|s| s.id == id))
    }

    fn persist(&self, snippets: &[SnippetEntry]) -> Result<(), LunaError> {
        let contents = serde_json::to_string_pretty(snippets)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
