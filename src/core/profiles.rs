// src/core/profiles.rs

//! The saved-profile store: a JSON array of connection credentials on disk.
//!
//! Profiles are appended by `entityc`, listed by `entityl`, looked up by
//! `entityg`, and consumed by `clone` to reconnect with stored credentials.

use crate::core::errors::LunaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A persisted set of connection credentials.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedProfile {
    pub id: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl fmt::Display for SavedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | username: {} | database: {}",
            self.id, self.username, self.database
        )
    }
}

/// Key-addressed JSON document holding all saved profiles.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full profile list. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<SavedProfile>, LunaError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Appends a profile, assigning the id `Person<count + 1>`, and persists
    /// the whole list.
    pub fn save_profile(
        &self,
        username: &str,
        password: &str,
        database: &str,
    ) -> Result<SavedProfile, LunaError> {
        let mut profiles = self.load()?;
        let profile = SavedProfile {
            id: format!("Person{}", profiles.len() + 1),
            username: username.to_string(),
            password: password.to_string(),
            database: database.to_string(),
        };
        profiles.push(profile.clone());
        self.persist(&profiles)?;
        Ok(profile)
    }

    /// Looks a profile up by id.
    pub fn get(&self, id: &str) -> Result<Option<SavedProfile>, LunaError> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    fn persist(&self, profiles: &[SavedProfile]) -> Result<(), LunaError> {
        let contents = serde_json::to_string_pretty(profiles)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
