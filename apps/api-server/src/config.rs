//! Application configuration loaded from environment variables.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use blog_core::domain::IdPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub id_policy: IdPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_policy: IdPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    ///
    /// Values that fail to parse fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            id_policy: parse_or(&lookup, "POST_ID_POLICY", defaults.id_policy),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(key, value = %raw, error = %e, "Invalid setting, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.id_policy, IdPolicy::Length);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("POST_ID_POLICY", "monotonic"),
        ]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.id_policy, IdPolicy::Monotonic);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[("PORT", "http"), ("POST_ID_POLICY", "uuid")]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.id_policy, IdPolicy::Length);
    }
}
