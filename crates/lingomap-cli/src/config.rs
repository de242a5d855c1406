//! CLI configuration management.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file,
//! environment variables (including a `.env` file), then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use lingomap_client::HttpLanguageClient;
use lingomap_core::{MapLayout, RegionData, DEFAULT_NUM_LANGUAGES};

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the `most_spoken_languages` endpoint.
    pub endpoint: String,

    /// Languages requested per hover.
    pub num_languages: u32,

    /// Optional request timeout. No timeout when unset.
    pub timeout_secs: Option<u64>,

    /// JSON file replacing the built-in region values.
    pub regions_file: Option<PathBuf>,

    /// Map styling.
    pub layout: MapLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: HttpLanguageClient::DEFAULT_ENDPOINT.to_string(),
            num_languages: DEFAULT_NUM_LANGUAGES,
            timeout_secs: None,
            regions_file: None,
            layout: MapLayout::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults plus the config file only. This is what `config set` edits,
    /// so environment and flag overrides never get persisted.
    pub fn load_file() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read a config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Override fields from environment-style lookups.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(endpoint) = var("LINGOMAP_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(n) = var("LINGOMAP_NUM_LANGUAGES") {
            self.num_languages = n
                .parse()
                .with_context(|| format!("LINGOMAP_NUM_LANGUAGES is not a number: {n}"))?;
        }
        if let Some(secs) = var("LINGOMAP_TIMEOUT_SECS") {
            self.timeout_secs = Some(
                secs.parse()
                    .with_context(|| format!("LINGOMAP_TIMEOUT_SECS is not a number: {secs}"))?,
            );
        }
        if let Some(path) = var("LINGOMAP_REGIONS_FILE") {
            self.regions_file = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "lingomap", "lingomap")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Region values from `regions_file`, or the built-in India dataset.
    pub fn region_data(&self) -> Result<RegionData> {
        match &self.regions_file {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read regions file {}", path.display()))?;
                RegionData::from_json(&json)
                    .with_context(|| format!("Failed to parse regions file {}", path.display()))
            }
            None => Ok(RegionData::india()),
        }
    }

    pub fn client(&self) -> Result<HttpLanguageClient> {
        HttpLanguageClient::with_timeout(&self.endpoint, self.timeout())
            .context("Failed to build HTTP client")
    }
}
