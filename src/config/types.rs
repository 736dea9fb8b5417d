// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use super::summary_types::SummaryConfig;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

/// Where `Ctrl+E` and `Ctrl+R` write their files
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            directory: default_export_directory(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}
