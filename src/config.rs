use crate::clock::{Clock, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::search::{DEFAULT_BASE_URL, DEFAULT_QUERY_PARAM, SearchEngine};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(skip)]
    path: Option<String>,
    /// Storage file for the search history.
    #[serde(default)]
    pub storage: Option<String>,
    /// Search engine the terms are sent to.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Header clock formats.
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EngineConfig {
    /// Results page URL without query string.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Name of the query parameter carrying the term.
    #[serde(default)]
    pub query_param: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClockConfig {
    /// strftime format of the time line.
    #[serde(default)]
    pub time_format: Option<String>,
    /// strftime format of the date line.
    #[serde(default)]
    pub date_format: Option<String>,
}

impl Config {
    /// Load configuration from the specified path, the default config dir (~/.config/searchbox/) or a local
    /// .searchbox.toml.
    pub fn load(path: &Option<String>) -> Self {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            Self::default_config_path()
        };
        Self::load_from_path(&config_path)
    }

    fn load_from_path(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(config_path) {
            Ok(content) => {
                let mut config = Self::parse(&content);
                config.path = config_path.to_str().map(|s| s.to_string());
                config
            }
            Err(e) => {
                info!("Failed to read config file {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Parses a TOML document, falling back to defaults if it is malformed.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_else(|e| {
            warn!("Ignoring malformed config: {}", e);
            Self::default()
        })
    }

    /// Get the path of the configuration file if it was loaded from a file.
    pub fn get_path(&self) -> Option<&String> {
        self.path.as_ref()
    }

    fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("searchbox").join("config.toml");
            if config_path.exists() {
                return config_path;
            }
        }
        // Fallback to local .searchbox.toml (might not exist)
        PathBuf::from(".searchbox.toml")
    }

    /// Storage file from the config, if one is set.
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage.as_ref().map(PathBuf::from)
    }

    pub fn build_engine(&self) -> SearchEngine {
        SearchEngine::new(
            self.engine.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.engine.query_param.as_deref().unwrap_or(DEFAULT_QUERY_PARAM),
        )
    }

    /// Builds the header clock. Formats chrono cannot render are replaced by the defaults.
    pub fn build_clock(&self) -> Clock {
        Clock::new(
            Self::checked_format(self.clock.time_format.as_deref(), DEFAULT_TIME_FORMAT),
            Self::checked_format(self.clock.date_format.as_deref(), DEFAULT_DATE_FORMAT),
        )
    }

    fn checked_format<'a>(format: Option<&'a str>, default: &'a str) -> &'a str {
        match format {
            Some(f) if Clock::is_valid_format(f) => f,
            Some(f) => {
                warn!("Invalid clock format {:?}, using {:?}", f, default);
                default
            }
            None => default,
        }
    }
}
