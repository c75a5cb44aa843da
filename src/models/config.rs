//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Wiki API and HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Page-layout assumptions used by the parsers
    #[serde(default)]
    pub parser: ParserConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.api.backlink_limit == 0 {
            return Err(AppError::validation("api.backlink_limit must be > 0"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.parser.credit_templates.is_empty() {
            return Err(AppError::validation("parser.credit_templates is empty"));
        }
        if self
            .parser
            .credit_templates
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(AppError::validation(
                "parser.credit_templates contains an empty name",
            ));
        }
        if self.parser.update_times_page.trim().is_empty() {
            return Err(AppError::validation("parser.update_times_page is empty"));
        }
        Ok(())
    }
}

/// Wiki API and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Site root, e.g. `https://en.wikipedia.org`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Namespace filter for backlink queries (10 is Template)
    #[serde(default = "defaults::backlink_namespace")]
    pub backlink_namespace: i32,

    /// Maximum backlinks fetched per query
    #[serde(default = "defaults::backlink_limit")]
    pub backlink_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            backlink_namespace: defaults::backlink_namespace(),
            backlink_limit: defaults::backlink_limit(),
        }
    }
}

/// Page-layout assumptions used by the parsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Column of the update-time table holding the UTC time
    #[serde(default = "defaults::time_column")]
    pub time_column: usize,

    /// Template name prefixes of credit lines (`* {{DYKmake|...}}`)
    #[serde(default = "defaults::credit_templates")]
    pub credit_templates: Vec<String>,

    /// Page holding the update-time table
    #[serde(default = "defaults::update_times_page")]
    pub update_times_page: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            time_column: defaults::time_column(),
            credit_templates: defaults::credit_templates(),
            update_times_page: defaults::update_times_page(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "https://en.wikipedia.org".into()
    }
    pub fn user_agent() -> String {
        concat!("dyk-tools/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn backlink_namespace() -> i32 {
        10
    }
    pub fn backlink_limit() -> u32 {
        100
    }

    // Parser defaults
    pub fn time_column() -> usize {
        3
    }
    pub fn credit_templates() -> Vec<String> {
        vec!["DYKmake".into(), "DYKnom".into()]
    }
    pub fn update_times_page() -> String {
        "Template:Did you know/Queue/LocalUpdateTimes".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_credit_templates() {
        let mut config = Config::default();
        config.parser.credit_templates.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://test.wikipedia.org\"\n\n[parser]\ntime_column = 2"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://test.wikipedia.org");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.parser.time_column, 2);
        assert_eq!(config.parser.credit_templates, vec!["DYKmake", "DYKnom"]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.parser.time_column, 3);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(AppError::Toml(_))));
    }
}
