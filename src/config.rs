use crate::browser::config::DEFAULT_USER_AGENT;
use crate::browser::BrowserConfig;
use crate::fetcher::{ELEMENT_WAIT_TIMEOUT_SECS, PROBLEM_DESCRIPTION_SELECTOR};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory
pub const CONFIG_FILE: &str = "fetcher.toml";

/// Environment variable overriding [`CONFIG_FILE`]
pub const CONFIG_ENV: &str = "LEETCODE_FETCHER_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Level of the stderr logger
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub fetcher: FetcherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetcherConfig {
    /// CSS selector of the problem description element
    #[serde(default = "default_selector")]
    pub selector: String,

    /// How long to wait for the element, in seconds
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_secs: u64,

    #[serde(default = "default_true")]
    pub headless: bool,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Disable when running as root inside containers
    #[serde(default = "default_true")]
    pub sandbox: bool,

    /// Chrome/Chromium binary, auto-detected when absent
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,
}

fn default_true() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }
fn default_selector() -> String { PROBLEM_DESCRIPTION_SELECTOR.to_string() }
fn default_wait_timeout() -> u64 { ELEMENT_WAIT_TIMEOUT_SECS }
fn default_window_width() -> u32 { 1280 }
fn default_window_height() -> u32 { 720 }
fn default_user_agent() -> String { DEFAULT_USER_AGENT.to_string() }

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            wait_timeout_secs: default_wait_timeout(),
            headless: true,
            window_width: default_window_width(),
            window_height: default_window_height(),
            user_agent: default_user_agent(),
            sandbox: true,
            chrome_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            fetcher: FetcherConfig::default(),
        }
    }
}

/// Errors reading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Location of the config file: `$LEETCODE_FETCHER_CONFIG` or `fetcher.toml`
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load the config, falling back to defaults when the file is missing or invalid.
    ///
    /// Returns the error alongside so the caller can report it once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        let path = Self::path();
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl FetcherConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    /// Browser settings for the Chrome launcher
    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            headless: self.headless,
            window_size: (self.window_width, self.window_height),
            user_agent: Some(self.user_agent.clone()),
            sandbox: self.sandbox,
            chrome_path: self.chrome_path.clone(),
            ..BrowserConfig::default()
        }
    }
}
