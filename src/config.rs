use crate::download::DEFAULT_TIMEOUT;
use crate::error::{OdlError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV: &str = "ODL_HOME";
const DEFAULT_HOME_DIR: &str = ".odl";

/// Defaults read from `config.toml`. Command-line flags take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OdlConfig {
    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default)]
    pub skip_existing: bool,

    #[serde(default)]
    pub no_progress: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            skip_existing: false,
            no_progress: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Used when neither --username nor OTN_USERNAME is set
    #[serde(default)]
    pub username: Option<String>,
}

impl DownloadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl OdlConfig {
    pub fn load(odl_home: &Path) -> Result<Self> {
        let config_path = odl_home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: OdlConfig = toml::from_str(&contents)
            .map_err(|e| OdlError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }
}

/// Directory holding `config.toml`: `$ODL_HOME`, else `~/.odl`.
pub fn odl_home() -> Option<PathBuf> {
    match env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir().map(|home| home.join(DEFAULT_HOME_DIR)),
    }
}

/// Load the configuration from the default location.
pub fn new_odl_config() -> Result<OdlConfig> {
    match odl_home() {
        Some(home) => OdlConfig::load(&home),
        None => {
            log::debug!("No home directory found, using default configuration");
            Ok(OdlConfig::default())
        }
    }
}
