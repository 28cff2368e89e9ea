//! Configuration loading
//!
//! Each setting resolves through the same priority order:
//! 1. Command-line argument (clap also maps the environment variable here)
//! 2. TOML config file, if present
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default listen address, matching the service's fixed local port
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default connection string; mode=rwc creates the database file on first run
pub const DEFAULT_DATABASE_URL: &str = "sqlite://albums.db?mode=rwc";

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string
    pub database_url: String,
    /// Listen address (host:port)
    pub bind: String,
}

/// Optional settings read from the TOML config file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database_url: Option<String>,
    bind: Option<String>,
}

impl Config {
    /// Resolve configuration from CLI/env values plus an optional config file.
    ///
    /// A missing config file is fine; an unparseable one is a fatal error.
    pub fn resolve(
        database_url: Option<String>,
        bind: Option<String>,
        config_path: &Path,
    ) -> Result<Config> {
        let file = load_config_file(config_path)?;

        Ok(Config {
            database_url: database_url
                .or(file.database_url)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind: bind
                .or(file.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
        })
    }
}

fn load_config_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}
