//! User configuration, read from `config.json` in the config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crm_ui::ThemeMode;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::Section;
use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for [`Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown theme '{0}', expected 'light' or 'dark'")]
    Theme(String),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
    #[error("unknown start page '{0}'")]
    StartPage(String),
}

/// Where the app opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPage {
    Login,
    Section(Section),
}

impl FromStr for StartPage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("login") {
            return Ok(Self::Login);
        }
        s.parse::<Section>()
            .map(Self::Section)
            .map_err(|_| ConfigError::StartPage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `light` or `dark`
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Skeleton rows shown while a list loads
    #[serde(default = "default_loading_row_count")]
    pub loading_row_count: usize,
    /// How long list pages pretend to load, in milliseconds
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `login` or a section name such as `leads`
    #[serde(default = "default_start_page")]
    pub start_page: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_loading_row_count() -> usize {
    crm_table::DEFAULT_LOADING_ROW_COUNT
}

fn default_loading_delay_ms() -> u64 {
    600
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_start_page() -> String {
    "login".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            loading_row_count: default_loading_row_count(),
            loading_delay_ms: default_loading_delay_ms(),
            log_level: default_log_level(),
            start_page: default_start_page(),
        }
    }
}

impl Config {
    /// Load from the platform config file, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and check every value.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme_mode()?;
        self.level_filter()?;
        self.start_page()?;
        Ok(())
    }

    pub fn theme_mode(&self) -> Result<ThemeMode, ConfigError> {
        self.theme
            .parse()
            .map_err(|_| ConfigError::Theme(self.theme.clone()))
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn start_page(&self) -> Result<StartPage, ConfigError> {
        self.start_page.parse()
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.loading_row_count, 5);
        assert_eq!(config.loading_delay(), Duration::from_millis(600));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::parse(r#"{ "theme": "dark", "loading_delay_ms": 0 }"#).unwrap();
        assert_eq!(config.theme_mode().unwrap(), ThemeMode::Dark);
        assert_eq!(config.loading_delay_ms, 0);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.start_page().unwrap(), StartPage::Login);
    }

    #[test]
    fn test_start_page_section() {
        let config = Config::parse(r#"{ "start_page": "Leads" }"#).unwrap();
        assert_eq!(config.start_page().unwrap(), StartPage::Section(Section::Leads));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Config::parse("{ nope"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            Config::parse(r#"{ "theme": "sepia" }"#),
            Err(ConfigError::Theme(theme)) if theme == "sepia"
        ));
        assert!(matches!(
            Config::parse(r#"{ "log_level": "loud" }"#),
            Err(ConfigError::LogLevel(_))
        ));
        assert!(matches!(
            Config::parse(r#"{ "start_page": "reports" }"#),
            Err(ConfigError::StartPage(_))
        ));
    }

    #[test]
    fn test_level_filter() {
        let config = Config {
            log_level: "warn".to_string(),
            ..Config::default()
        };
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }
}
