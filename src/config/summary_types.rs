// Summary (Gemini) configuration

use serde::Deserialize;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_top_values() -> usize {
    10
}

fn default_sample_drops() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Whether `Ctrl+A` may send data to the API
    #[serde(default)]
    pub enabled: bool,
    /// Falls back to $GEMINI_API_KEY when absent
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Number of top values included in the request
    #[serde(default = "default_top_values")]
    pub top_values: usize,
    /// Number of leading records included in the request
    #[serde(default = "default_sample_drops")]
    pub sample_drops: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            enabled: false,
            api_key: None,
            model: default_model(),
            top_values: default_top_values(),
            sample_drops: default_sample_drops(),
        }
    }
}

impl SummaryConfig {
    /// Configured key, else the environment variable. Blank keys count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_api_key_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env(API_KEY_ENV))
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_wins_over_env() {
        let config = SummaryConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_fallback() {
        let config = SummaryConfig::default();
        let key = config.resolve_api_key_with(|name| {
            assert_eq!(name, "GEMINI_API_KEY");
            Some("from-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = SummaryConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key_with(|_| None), None);
    }
}
