//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default bookmarks directory
    pub dir: Option<PathBuf>,

    /// Default note template file
    pub template: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/dropmark/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dropmark")
            .join("config.toml")
    }

    /// Resolve the bookmarks directory, with CLI argument taking
    /// precedence over the config file, falling back to the current
    /// working directory.
    pub fn bookmarks_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the template file, with CLI argument taking precedence.
    /// `None` selects the built-in default layout.
    pub fn template<'a>(&'a self, cli_template: Option<&'a PathBuf>) -> Option<&'a Path> {
        cli_template
            .or(self.template.as_ref())
            .map(PathBuf::as_path)
    }
}
