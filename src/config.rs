use std::env;

use crate::{
    error::{FoomaxError, Result},
    logger::{LogLevel, LoggerConfig},
};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `API_KEY`, falling back to `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        let api_key = resolve_api_key(|name| env::var(name).ok());
        let model = env::var("GEMINI_MODEL").ok();
        let base_url = env::var("GEMINI_BASE_URL").ok();

        GeminiConfig {
            api_key,
            model,
            base_url,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| FoomaxError::ConfigError("API_KEY environment variable not set".into()))
    }

    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url_or_default(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub log_level: LogLevel,
    pub log_json: bool,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini: GeminiConfig::default(),
            log_level: LogLevel::Info,
            log_json: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let log_level = env::var("FOOMAX_LOG_LEVEL")
            .ok()
            .and_then(|level| LogLevel::parse(&level))
            .unwrap_or(LogLevel::Info);
        let log_json = env::var("FOOMAX_LOG_JSON")
            .ok()
            .map_or(false, |val| val == "true" || val == "1");
        let log_file = env::var("FOOMAX_LOG_FILE").ok();

        Config {
            gemini: GeminiConfig::from_env(),
            log_level,
            log_json,
            log_file,
        }
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Fails when the API credential is absent.
    pub fn validate(&self) -> Result<()> {
        self.gemini.require_api_key().map(|_| ())
    }

    pub fn logger_config(&self) -> LoggerConfig {
        let mut logger = if self.log_json {
            LoggerConfig::production()
        } else {
            LoggerConfig::development()
        }
        .with_level(self.log_level);

        logger = match &self.log_file {
            Some(path) => logger.with_file_output(path),
            None => logger.without_file_output(),
        };
        logger
    }
}

/// First non-blank key among the supported variables.
fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::new();
        assert_eq!(config.model_or_default(), "gemini-2.5-flash");
        assert_eq!(
            config.base_url_or_default(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = Config::new();
        match config.validate() {
            Err(FoomaxError::ConfigError(msg)) => assert!(msg.contains("API_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_builder() {
        let config = Config::new().with_gemini(
            GeminiConfig::new()
                .with_api_key("secret")
                .with_model("gemini-2.0-flash")
                .with_base_url("http://localhost:8080/"),
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.gemini.model_or_default(), "gemini-2.0-flash");
        assert_eq!(config.gemini.base_url_or_default(), "http://localhost:8080");
    }

    #[test]
    fn test_logger_config_follows_json_flag() {
        let mut config = Config::new().with_log_level(LogLevel::Warn);
        config.log_json = true;
        let logger = config.logger_config();
        assert!(logger.output_json);
        assert!(!logger.log_to_file);
        assert_eq!(logger.min_level, LogLevel::Warn);
    }

    #[test]
    fn test_blank_api_key_falls_back_to_gemini_key() {
        let lookup = lookup_in(&[("API_KEY", "  "), ("GEMINI_API_KEY", "gm-key")]);
        assert_eq!(resolve_api_key(lookup).as_deref(), Some("gm-key"));
    }

    #[test]
    fn test_api_key_preferred_over_gemini_key() {
        let lookup = lookup_in(&[("API_KEY", "primary"), ("GEMINI_API_KEY", "gm-key")]);
        assert_eq!(resolve_api_key(lookup).as_deref(), Some("primary"));
        assert_eq!(resolve_api_key(lookup_in(&[("API_KEY", "")])), None);
    }
}
