use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "HOTELDASH_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "hoteldash.log";
const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON file of daily records. The built-in sample week is used when unset.
    pub data_file: Option<PathBuf>,
    /// Event poll interval of the terminal UI.
    pub tick_rate_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}

/// `~/.hoteldash`
pub fn data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".hoteldash"))
}

impl DashboardConfig {
    /// Resolves the config file: `explicit`, then `$HOTELDASH_CONFIG`, then
    /// `~/.hoteldash/config.toml`. Only the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        match data_dir() {
            Ok(dir) => {
                let path = dir.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: DashboardConfig = toml::from_str(contents)?;
        if cfg.tick_rate_ms == 0 {
            return Err(anyhow!("tick_rate_ms must be greater than zero"));
        }
        Ok(cfg)
    }

    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(LOG_FILE_NAME)),
        }
    }
}
