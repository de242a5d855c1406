//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

const KEYS: &str = "endpoint, num-languages, timeout-secs, regions-file";

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("Lingo-Map Configuration");
    println!("{:-<40}", "");

    println!("Endpoint:        {}", config.endpoint);
    println!("Languages:       {}", config.num_languages);
    println!(
        "Timeout:         {}",
        config
            .timeout_secs
            .map(|s| format!("{s}s"))
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!(
        "Regions file:    {}",
        config
            .regions_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!("Map title:       {}", config.layout.title);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "endpoint" => {
            config.endpoint = value.to_string();
        }
        "num-languages" | "count" => {
            config.num_languages = value.parse()?;
        }
        "timeout-secs" | "timeout" => {
            config.timeout_secs = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.parse()?)
            };
        }
        "regions-file" => {
            config.regions_file = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS);
        }
    }

    println!("Set {} to: {}", key, value);
    config.save()?;
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "endpoint" => config.endpoint.clone(),
        "num-languages" | "count" => config.num_languages.to_string(),
        "timeout-secs" | "timeout" => config
            .timeout_secs
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        "regions-file" => config
            .regions_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
