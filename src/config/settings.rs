use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::session::PageSize;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub history: HistoryConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the quiz service, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryConfig {
    pub page_size: PageSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Show HCP and shape under the hand
    pub show_hcp: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_hcp: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlServerConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlHistoryConfig {
    page_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlDisplayConfig {
    show_hcp: Option<bool>,
}

/// On-disk shape of config.toml
#[derive(Debug, Clone, Default, Deserialize)]
struct TomlConfig {
    server: Option<TomlServerConfig>,
    history: Option<TomlHistoryConfig>,
    display: Option<TomlDisplayConfig>,
}

impl Config {
    /// Load configuration from ~/.bidquiz/config.toml, creating it from the
    /// bundled example on first run. Never fails; problems fall back to defaults.
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`, merging it over the defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No readable config file");
                return Config::default();
            }
        };

        match Self::from_toml(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Config::default()
            }
        }
    }

    /// Parse TOML text and merge it over the defaults
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(server) = toml_config.server {
            if let Some(base_url) = server.base_url {
                let trimmed = base_url.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    tracing::warn!("Empty server.base_url in config, using default");
                } else {
                    config.server.base_url = trimmed.to_string();
                }
            }
            if let Some(secs) = server.timeout_secs {
                if secs == 0 {
                    tracing::warn!("server.timeout_secs must be positive, using default");
                } else {
                    config.server.timeout = Duration::from_secs(secs);
                }
            }
        }

        if let Some(history) = toml_config.history {
            if let Some(size) = history.page_size {
                match PageSize::new(size) {
                    Some(page_size) => config.history.page_size = page_size,
                    None => tracing::warn!(size, "Unsupported history.page_size, using default"),
                }
            }
        }

        if let Some(display) = toml_config.display {
            if let Some(show_hcp) = display.show_hcp {
                config.display.show_hcp = show_hcp;
            }
        }

        Ok(config)
    }

    fn create_default_config(path: &Path) {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        // Write the example config
        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}
