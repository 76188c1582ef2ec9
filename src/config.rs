// src/config.rs

//! Manages CLI configuration: loading from a TOML file with per-field defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::warn;

/// Configuration for the Prometheus metrics exporter.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MetricsConfig {
    /// If true, an HTTP server exposes Prometheus metrics on `/metrics`.
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    /// The port for the Prometheus metrics server.
    #[serde(default = "default_metrics_port")]
    pub port: u16,
    /// How often the system sampler refreshes CPU/memory/load gauges.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_poll_interval() -> u64 {
    10
}

/// Paths of the JSON documents backing the profile and snippet stores.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_profiles_path")]
    pub profiles_path: String,
    #[serde(default = "default_snippets_path")]
    pub snippets_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            profiles_path: default_profiles_path(),
            snippets_path: default_snippets_path(),
        }
    }
}

fn default_profiles_path() -> String {
    "connections.json".to_string()
}
fn default_snippets_path() -> String {
    "snippets.json".to_string()
}

/// The resolved CLI configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// The database host new sessions connect to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The initial database port; changeable at runtime with `luna port`.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory that `luna out export:<file>` writes CSV files into.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub stores: StoreConfig,
}

fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    5432
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_export_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| ".".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            export_dir: default_export_dir(),
            metrics: MetricsConfig::default(),
            stores: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file. A missing file is not an
    /// error for an interactive tool: the defaults are used instead.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Config file \"{path}\" not found, using defaults.");
                return Ok(Config::default());
            }
            Err(e) => return Err(e).with_context(|| format!("failed to read \"{path}\"")),
        };
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file \"{path}\""))?;
        Ok(config)
    }
}
