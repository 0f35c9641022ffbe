//! Configuration for scaffolding defaults
//!
//! Stored at `~/.cobble/config.toml`; every key is optional and CLI
//! flags override loaded values. The struct is passed explicitly to the
//! library entry points, so nothing reads process-global state.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Scaffolding defaults, merged from the config file and CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Author line for copyright headers.
    pub author: String,
    /// License identifier understood by the license registry.
    pub license: String,
    /// Wire viper configuration support into generated root commands.
    pub use_viper: bool,
    /// Package path prefix for projects outside a workspace, e.g.
    /// "github.com/acme". Empty means the bare project name.
    pub pkg_prefix: String,
    /// Explicit package path, overriding prefix and name derivation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkg_name: Option<String>,
    /// Copyright year override; defaults to the current UTC year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: "NAME HERE <EMAIL ADDRESS>".to_string(),
            license: "apache".to_string(),
            use_viper: false,
            pkg_prefix: String::new(),
            pkg_name: None,
            year: None,
        }
    }
}

/// Default config file location: `~/.cobble/config.toml`.
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cobble")
        .join("config.toml")
}

impl Config {
    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// The copyright line stamped into generated files.
    pub fn copyright_line(&self) -> String {
        let year = self.year.unwrap_or_else(|| Utc::now().year());
        format!("Copyright © {} {}", year, self.author)
    }
}
