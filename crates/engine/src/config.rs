//! Engine configuration, loaded from the environment.

use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderName;

/// Runtime settings for the engine binary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// sqlx SQLite URL
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    /// Header the identity proxy forwards the acting user's UUID in
    pub user_id_header: HeaderName,
    /// Skill checks per user per minute; 0 disables limiting
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    /// Comma-separated origins, or "*" for any. `None` means no CORS layer.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:grimroll.db?mode=rwc".to_string(),
            database_max_connections: 5,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            user_id_header: HeaderName::from_static("x-user-id"),
            rate_limit_per_minute: 30,
            rate_limit_burst: 10,
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Load from environment variables, using defaults for missing values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup. Unparseable values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = var("SERVER_PORT")
            .map(|raw| ("SERVER_PORT", raw))
            .or_else(|| var("PORT").map(|raw| ("PORT", raw)))
            .map(|(key, raw)| parse_or(key, &raw, defaults.server_port))
            .unwrap_or(defaults.server_port);

        let user_id_header = match var("USER_ID_HEADER") {
            Some(raw) => HeaderName::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = "USER_ID_HEADER", value = %raw, error = %e, "Invalid header name, using default");
                defaults.user_id_header.clone()
            }),
            None => defaults.user_id_header.clone(),
        };

        Self {
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: var("DATABASE_MAX_CONNECTIONS")
                .map(|raw| {
                    parse_or("DATABASE_MAX_CONNECTIONS", &raw, defaults.database_max_connections)
                })
                .unwrap_or(defaults.database_max_connections)
                .max(1),
            server_host: var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            user_id_header,
            rate_limit_per_minute: var("RATE_LIMIT_PER_MINUTE")
                .map(|raw| parse_or("RATE_LIMIT_PER_MINUTE", &raw, defaults.rate_limit_per_minute))
                .unwrap_or(defaults.rate_limit_per_minute),
            rate_limit_burst: var("RATE_LIMIT_BURST")
                .map(|raw| parse_or("RATE_LIMIT_BURST", &raw, defaults.rate_limit_burst))
                .unwrap_or(defaults.rate_limit_burst),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        }
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    raw.parse().unwrap_or_else(|e: T::Err| {
        tracing::warn!(key, value = raw, error = %e, default = %default, "Invalid config value, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config(&[]);
        assert_eq!(config.database_url, "sqlite:grimroll.db?mode=rwc");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.user_id_header.as_str(), "x-user-id");
        assert_eq!(config.rate_limit_per_minute, 30);
        assert_eq!(config.rate_limit_burst, 10);
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn server_port_falls_back_to_port() {
        assert_eq!(config(&[("PORT", "8080")]).server_port, 8080);
        assert_eq!(
            config(&[("SERVER_PORT", "9000"), ("PORT", "8080")]).server_port,
            9000
        );
    }

    #[test]
    fn invalid_numbers_use_defaults() {
        let config = config(&[
            ("SERVER_PORT", "http"),
            ("RATE_LIMIT_PER_MINUTE", "-3"),
            ("RATE_LIMIT_BURST", "lots"),
        ]);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.rate_limit_per_minute, 30);
        assert_eq!(config.rate_limit_burst, 10);
    }

    #[test]
    fn custom_identity_header_and_disabled_limit() {
        let config = config(&[
            ("USER_ID_HEADER", "X-Forwarded-User"),
            ("RATE_LIMIT_PER_MINUTE", "0"),
        ]);
        assert_eq!(config.user_id_header.as_str(), "x-forwarded-user");
        assert_eq!(config.rate_limit_per_minute, 0);
    }

    #[test]
    fn invalid_header_name_uses_default() {
        let config = config(&[("USER_ID_HEADER", "not a header")]);
        assert_eq!(config.user_id_header.as_str(), "x-user-id");
    }
}
