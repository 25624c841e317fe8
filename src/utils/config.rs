// src/utils/config.rs

use crate::api::config::DEFAULT_BASE_URL;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub log_level: String,
    pub output_directory: String,
}

pub fn get_config_path() -> PathBuf {
    let mut path = get_executable_dir();
    path.push("config.toml");
    path
}

/// Validate config to prevent obviously wrong or missing values.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(AppError::InvalidInput(format!(
            "Base URL must start with http:// or https://: {}",
            config.base_url
        )));
    }
    match config.log_level.as_str() {
        "off" | "debug" | "info" | "warn" | "error" => {}
        other => {
            return Err(AppError::InvalidInput(format!(
                "Unknown log level: {}",
                other
            )));
        }
    }
    if !Path::new(&config.output_directory).is_dir() {
        return Err(AppError::InvalidInput(format!(
            "Output directory does not exist: {}",
            config.output_directory
        )));
    }
    Ok(())
}

/// Read config from file, and create a default config if none exists.
pub fn read_config() -> Result<Config, AppError> {
    let config_path = get_config_path();
    if !config_path.exists() {
        // Create default config if it doesn't exist
        let default_config = Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "off".to_string(),
            output_directory: "./".to_string(),
        };
        write_config(&default_config)?;
    }
    let config_str = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn write_config(config: &Config) -> std::io::Result<()> {
    let config_path = get_config_path();
    let config_str = toml::to_string(config).expect("Failed to serialize config");
    fs::write(config_path, config_str)
}

fn get_executable_dir() -> PathBuf {
    env::current_exe()
        .expect("Failed to get the executable path")
        .parent()
        .expect("Failed to get the executable directory")
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "off".to_string(),
            output_directory: "./".to_string(),
        }
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = sample_config();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.log_level, config.log_level);
        assert_eq!(parsed.output_directory, config.output_directory);
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = sample_config();
        config.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let mut config = sample_config();
        config.base_url = "127.0.0.1:8000".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate_config(&sample_config()).is_ok());
    }
}
