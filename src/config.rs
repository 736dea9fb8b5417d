// Configuration module for droplens
// Loads settings from ~/.config/droplens/config.toml

mod summary_types;
mod types;

pub use summary_types::{API_KEY_ENV, SummaryConfig};
pub use types::{ClipboardBackend, Config, ExportConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/droplens/config.toml
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from `path`.
///
/// A missing file gives defaults silently. A file that cannot be read or
/// parsed gives defaults plus a warning for the UI.
pub fn load_config_from(path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", path);

    if !path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!(
                "Config parsed: clipboard={:?}, summary enabled={}",
                config.clipboard.backend,
                config.summary.enabled
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Always ~/.config/droplens/config.toml, on every platform
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("droplens")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
