//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths are not read here; they come from the leptos
//! configuration (`LEPTOS_SITE_ADDR` and friends).

use thiserror::Error;

/// Tracing filter directive variable
pub const LOG_FILTER_VAR: &str = "AGRIPREDICT_LOG";

/// Response compression toggle variable
pub const COMPRESSION_VAR: &str = "AGRIPREDICT_COMPRESSION";

/// Filter used when `AGRIPREDICT_LOG` is unset or blank
pub const DEFAULT_LOG_FILTER: &str = "info,agripredict=debug";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    /// Example: info,agripredict=debug,tower_http=debug
    pub log_filter: String,

    /// Compress responses with brotli/gzip
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match lookup(COMPRESSION_VAR) {
            Some(value) if !value.trim().is_empty() => parse_bool(COMPRESSION_VAR, &value)?,
            _ => true,
        };

        Ok(Self {
            log_filter,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    // ========================================================================
    // Lookup Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info,agripredict=debug");
        assert!(config.compression);
    }

    #[test]
    fn test_log_filter_override() {
        let config =
            Config::from_lookup(lookup_from(&[(LOG_FILTER_VAR, " warn,tower_http=debug ")]))
                .unwrap();
        assert_eq!(config.log_filter, "warn,tower_http=debug");
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "   ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_values() {
        for (value, expected) in [
            ("true", true),
            ("1", true),
            ("YES", true),
            ("on", true),
            ("false", false),
            ("0", false),
            ("No", false),
            (" off ", false),
        ] {
            let config = Config::from_lookup(lookup_from(&[(COMPRESSION_VAR, value)])).unwrap();
            assert_eq!(config.compression, expected, "value {value:?}");
        }
    }

    #[test]
    fn test_blank_compression_uses_default() {
        let config = Config::from_lookup(lookup_from(&[(COMPRESSION_VAR, "")])).unwrap();
        assert!(config.compression);
    }

    #[test]
    fn test_malformed_compression_rejected() {
        let err = Config::from_lookup(lookup_from(&[(COMPRESSION_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: COMPRESSION_VAR,
                value: "maybe".to_string(),
            }
        );
        assert!(err.to_string().starts_with("AGRIPREDICT_COMPRESSION must be a boolean"));
    }
}
