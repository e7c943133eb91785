use anyhow::{Context, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "product-compass";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "product_compass=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port for the HTTP API
    pub port: u16,
    /// JSON file with dashboard seed data. The built-in demo data is used when unset.
    pub seed_path: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_path: None,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the user's config directory.
    /// Returns defaults if the file doesn't exist.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Apply environment overrides looked up through `var`.
    ///
    /// An unparsable `COMPASS_PORT` is ignored with a warning.
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(port) = var("COMPASS_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid COMPASS_PORT: {}", port),
            }
        }
        if let Some(seed) = var("COMPASS_SEED") {
            self.seed_path = Some(PathBuf::from(seed));
        }
        self
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
