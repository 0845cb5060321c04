//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, ports and asset paths come from Leptos' own configuration.

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive (`RUST_LOG`)
    /// Example: docboard=debug,tower_http=info
    pub log_filter: String,

    /// Whether responses are compressed with Brotli/Gzip (`DOCBOARD_COMPRESSION`)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("RUST_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = lookup("DOCBOARD_COMPRESSION")
            .and_then(|value| parse_flag(&value))
            .unwrap_or(true);

        Self {
            log_filter,
            compression,
        }
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

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // No env var mutation, so these are safe to run in parallel.
    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_log_filter_from_rust_log() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "docboard=debug")]));
        assert_eq!(config.log_filter, "docboard=debug");

        let config = Config::from_lookup(lookup(&[("RUST_LOG", "  ")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_flag() {
        for (value, expected) in [("false", false), ("0", false), ("OFF", false), ("yes", true)] {
            let config = Config::from_lookup(lookup(&[("DOCBOARD_COMPRESSION", value)]));
            assert_eq!(config.compression, expected, "value {value}");
        }

        // Unrecognized values keep the default
        let config = Config::from_lookup(lookup(&[("DOCBOARD_COMPRESSION", "maybe")]));
        assert!(config.compression);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check it loads
        let config = Config::from_env();
        assert!(!config.log_filter.is_empty());
    }
}
