//! Application configuration

use std::env;

use anyhow::{Context, Result};

use devpoints_domain::DieTier;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,

    /// CORS allowed origins (comma-separated, or "*" for any); `None` disables CORS
    pub cors_allowed_origins: Option<String>,

    /// Largest level or bonus span a single request may price
    pub max_level_span: u32,
    /// Reference die for training time when a request does not name one
    pub default_training_die: DieTier,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            cors_allowed_origins: None,
            max_level_span: 1000,
            default_training_die: DieTier::D10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),

            server_port: match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
                Some(port) => port
                    .trim()
                    .parse()
                    .context("SERVER_PORT must be a valid port number")?,
                None => defaults.server_port,
            },

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),

            max_level_span: match lookup("MAX_LEVEL_SPAN") {
                Some(span) => span
                    .trim()
                    .parse()
                    .context("MAX_LEVEL_SPAN must be a non-negative integer")?,
                None => defaults.max_level_span,
            },

            default_training_die: match lookup("DEFAULT_TRAINING_DIE") {
                Some(die) => die
                    .parse()
                    .context("DEFAULT_TRAINING_DIE must be one of d2, d4, d6, d8, d10, d12, d20")?,
                None => defaults.default_training_die,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_training_die, DieTier::D10);
        assert_eq!(config.max_level_span, 1000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", " http://localhost:5173 "),
            ("MAX_LEVEL_SPAN", "50"),
            ("DEFAULT_TRAINING_DIE", "d6"),
        ])
        .unwrap();

        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(
            config.cors_allowed_origins.as_deref(),
            Some("http://localhost:5173")
        );
        assert_eq!(config.max_level_span, 50);
        assert_eq!(config.default_training_die, DieTier::D6);
    }

    #[test]
    fn test_port_fallback() {
        let config = config_from(&[("PORT", "4000")]).unwrap();
        assert_eq!(config.server_port, 4000);
    }

    #[test]
    fn test_blank_cors_disables_it() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "   ")]).unwrap();
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("SERVER_PORT", "abc")]).is_err());
        assert!(config_from(&[("MAX_LEVEL_SPAN", "-1")]).is_err());
        assert!(config_from(&[("DEFAULT_TRAINING_DIE", "d7")]).is_err());
    }
}
