//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Respira";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_ADVICE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ADVICE_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "respira.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal (the TUI owns it), stdout otherwise
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Settings for the external advice service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ADVICE_ENDPOINT.to_string(),
            model: DEFAULT_ADVICE_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_ADVICE_TIMEOUT_SECS,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON catalog to load instead of the builtin one
    pub knowledge_path: Option<PathBuf>,
    pub advice: AdviceConfig,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = ["RESPIRA_ADVICE_API_KEY", "GEMINI_API_KEY", "API_KEY"]
            .iter()
            .find_map(|key| get(*key));

        let timeout_secs = get("RESPIRA_ADVICE_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_ADVICE_TIMEOUT_SECS);

        Self {
            knowledge_path: get("RESPIRA_KNOWLEDGE_PATH").map(PathBuf::from),
            advice: AdviceConfig {
                endpoint: get("RESPIRA_ADVICE_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_ADVICE_ENDPOINT.to_string()),
                model: get("RESPIRA_ADVICE_MODEL")
                    .unwrap_or_else(|| DEFAULT_ADVICE_MODEL.to_string()),
                api_key,
                timeout_secs,
            },
            log_mode: get("RESPIRA_LOG_MODE")
                .map(|v| LogMode::parse(&v))
                .unwrap_or(LogMode::Auto),
            log_file: get("RESPIRA_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert!(cfg.knowledge_path.is_none());
        assert_eq!(cfg.advice, AdviceConfig::default());
        assert_eq!(cfg.log_mode, LogMode::Auto);
        assert_eq!(cfg.log_file, PathBuf::from("respira.log"));
    }

    #[test]
    fn test_api_key_precedence() {
        let cfg = config(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "gemini")]);
        assert_eq!(cfg.advice.api_key.as_deref(), Some("gemini"));

        let cfg = config(&[("RESPIRA_ADVICE_API_KEY", "own"), ("API_KEY", "generic")]);
        assert_eq!(cfg.advice.api_key.as_deref(), Some("own"));

        let cfg = config(&[("RESPIRA_ADVICE_API_KEY", "  "), ("API_KEY", "generic")]);
        assert_eq!(cfg.advice.api_key.as_deref(), Some("generic"));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        assert_eq!(
            config(&[("RESPIRA_ADVICE_TIMEOUT_SECS", "abc")]).advice.timeout_secs,
            DEFAULT_ADVICE_TIMEOUT_SECS
        );
        assert_eq!(
            config(&[("RESPIRA_ADVICE_TIMEOUT_SECS", "0")]).advice.timeout_secs,
            DEFAULT_ADVICE_TIMEOUT_SECS
        );
        assert_eq!(
            config(&[("RESPIRA_ADVICE_TIMEOUT_SECS", "12")]).advice.timeout_secs,
            12
        );
    }

    #[test]
    fn test_log_mode() {
        assert_eq!(config(&[("RESPIRA_LOG_MODE", "FILE")]).log_mode, LogMode::File);
        assert_eq!(config(&[("RESPIRA_LOG_MODE", "stdout")]).log_mode, LogMode::Stdout);
        assert_eq!(config(&[("RESPIRA_LOG_MODE", "weird")]).log_mode, LogMode::Auto);

        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }

    #[test]
    fn test_knowledge_path() {
        let cfg = config(&[("RESPIRA_KNOWLEDGE_PATH", "/etc/respira/catalog.json")]);
        assert_eq!(
            cfg.knowledge_path,
            Some(PathBuf::from("/etc/respira/catalog.json"))
        );
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "Respira");
        assert!(!APP_VERSION.is_empty());
    }
}
