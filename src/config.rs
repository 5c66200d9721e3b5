use anyhow::{Context, Result};
use schedsync_core::SyncConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Schedule file, calendar and format settings
    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub google: GoogleConfig,
}

/// Where the Google access token is stored
#[derive(Debug, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

fn default_token_path() -> String {
    "~/.config/schedsync/token.json".to_string()
}

/// Get the config directory path (~/.config/schedsync)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("schedsync");
    Ok(config_dir)
}

/// Get the default config file path (~/.config/schedsync/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from `path`, or from ~/.config/schedsync/config.toml
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };

    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with at least your calendar id:\n\n\
            [sync]\n\
            source_path = \"schedule.csv\"\n\
            calendar_id = \"your-calendar@group.calendar.google.com\"",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(contents)?;

    config.sync.source_path = expand_path(&config.sync.source_path.to_string_lossy());
    config.sync.validate()?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [sync]
            source_path = "/data/schedule.csv"
            calendar_id = "team@group.calendar.google.com"
            date_format = "%d/%m/%Y %H:%M"
            time_zone = "Europe/Helsinki"
            max_results = 250

            [google]
            token_path = "/secrets/token.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.sync.source_path, PathBuf::from("/data/schedule.csv"));
        assert_eq!(config.sync.calendar_id, "team@group.calendar.google.com");
        assert_eq!(config.sync.date_format, "%d/%m/%Y %H:%M");
        assert_eq!(config.sync.time_zone, "Europe/Helsinki");
        assert_eq!(config.sync.max_results, 250);
        assert_eq!(config.google.token_path, "/secrets/token.json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.sync.calendar_id, "primary");
        assert_eq!(config.sync.source_path, PathBuf::from("schedule.csv"));
        assert_eq!(config.google.token_path, "~/.config/schedsync/token.json");
    }

    #[test]
    fn test_invalid_time_zone_fails_validation() {
        let result = parse_config("[sync]\ntime_zone = \"Nowhere/City\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_date_only_format_fails_validation() {
        let result = parse_config("[sync]\ndate_format = \"%Y-%m-%d\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("data/schedule.csv"), PathBuf::from("data/schedule.csv"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/schedsync.toml")));
        assert!(result.is_err());
    }
}
