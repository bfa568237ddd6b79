//! User configuration and per-invocation defaults.
//!
//! Settings come from `~/.sporty/config.json`, with `SPORTY_API_KEY` and
//! `SPORTY_BASE_URL` taking precedence over the file. Handlers never read the
//! environment themselves; they receive a [`Defaults`] value built once in
//! `main`.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    cli::types::Season,
    error::{Result, SportyError},
    API_KEY_ENV_VAR, BASE_URL_ENV_VAR,
};

pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Contents of the config file. Every field is optional so a partial file is
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Path: ~/.sporty/config.json
pub fn default_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".sporty").join("config.json")
}

impl Config {
    /// Read the config file strictly: a missing file is an empty config,
    /// anything unreadable or malformed is an error.
    pub fn read(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).map_err(|e| SportyError::Config {
                message: format!("invalid JSON in {}: {}", path.display(), e),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the config file, falling back to defaults with a warning when it
    /// cannot be used. Commands that only read settings go through here.
    pub fn load(path: &Path) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            warn!("Ignoring config file {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load the file and apply environment overrides.
    pub fn load_with_env(path: &Path) -> Self {
        Self::load(path).with_overrides(
            std::env::var(API_KEY_ENV_VAR).ok(),
            std::env::var(BASE_URL_ENV_VAR).ok(),
        )
    }

    /// Apply environment values on top of the file values. Empty strings are
    /// treated as unset.
    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = Some(url);
        }
        self
    }

    /// Write the config as pretty JSON, creating `~/.sporty` if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Request timeout. Zero would fail every request, so it counts as unset.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Hide all but the first and last four characters of a key.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

/// Values a handler falls back to when the user gave none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub timezone: String,
    pub season: Season,
    pub today: NaiveDate,
}

impl Defaults {
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        Self {
            timezone: config
                .timezone
                .clone()
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            season: Season::current(today),
            today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_read_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::read(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_invalid_json_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        match Config::read(&path).unwrap_err() {
            SportyError::Config { message } => assert!(message.contains("invalid JSON")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_save_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_key: Some("abcd1234efgh5678".to_string()),
            timeout_secs: Some(10),
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::read(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), Duration::from_secs(10));
        assert_eq!(loaded.base_url(), DEFAULT_BASE_URL);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("base_url"));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = Config {
            timeout_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        }
        .with_overrides(Some("from-env".to_string()), Some("http://localhost:1".to_string()));

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.base_url(), "http://localhost:1");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        }
        .with_overrides(Some("  ".to_string()), None);

        assert_eq!(config.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("abcd1234efgh5678"), "abcd********5678");
        assert_eq!(mask_api_key("short"), "****");
        assert_eq!(mask_api_key("12345678"), "****");
        assert_eq!(mask_api_key("123456789"), "1234*6789");
    }

    #[test]
    fn test_defaults_from_config() {
        let defaults = Defaults::from_config(&Config::default(), date(2024, 3, 10));
        assert_eq!(defaults.timezone, "UTC");
        assert_eq!(defaults.season, Season::new(2023));

        let config = Config {
            timezone: Some("Europe/London".to_string()),
            ..Config::default()
        };
        let defaults = Defaults::from_config(&config, date(2024, 8, 1));
        assert_eq!(defaults.timezone, "Europe/London");
        assert_eq!(defaults.season, Season::new(2024));
    }
}
