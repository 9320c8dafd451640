// Centralized configuration management for Urlscope Backend
// Load ALL env vars ONCE at startup

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

use crate::utils::risk_scorer::DEFAULT_DOMAIN_BLACKLIST;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Global application configuration loaded once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    #[cfg(test)]
    dotenv::dotenv().ok();

    AppConfig::from_env().expect("Failed to load configuration")
});

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Server
    pub bind_address: String,
    pub port: u16,
    pub environment: Environment,
    pub rust_log: String,

    // Security
    pub cors_allowed_origins: Vec<String>,

    // Nested configs
    pub dns: DnsConfig,
    pub geo: GeoConfig,
    pub security: SecurityConfig,
    pub features: FeatureConfig,
}

/// DNS-over-HTTPS resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// IP geolocation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// Scoring security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Exact-match hostname blacklist fed to the risk scorer. Overridable via
    /// DOMAIN_BLACKLIST (comma-separated); defaults to the built-in list.
    pub domain_blacklist: Vec<String>,
}

/// Feature flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub enable_swagger_ui: bool,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" => Environment::Staging,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with sane defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment =
            Environment::from(env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()));

        let port = parse_var("PORT", 8080)?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let domain_blacklist = match env::var("DOMAIN_BLACKLIST") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => DEFAULT_DOMAIN_BLACKLIST
                .iter()
                .map(|d| d.to_string())
                .collect(),
        };

        Ok(AppConfig {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            environment: environment.clone(),
            rust_log: env::var("RUST_LOG")
                .unwrap_or_else(|_| "urlscope_backend_core=debug,tower_http=info".to_string()),
            cors_allowed_origins,
            dns: DnsConfig {
                endpoint: env::var("DNS_OVER_HTTPS_ENDPOINT")
                    .unwrap_or_else(|_| "https://dns.google".to_string()),
                timeout_secs: parse_var("DNS_TIMEOUT_SECS", 5)?,
            },
            geo: GeoConfig {
                endpoint: env::var("GEO_LOOKUP_ENDPOINT")
                    .unwrap_or_else(|_| "https://ipwho.is".to_string()),
                timeout_secs: parse_var("GEO_TIMEOUT_SECS", 5)?,
            },
            security: SecurityConfig { domain_blacklist },
            features: FeatureConfig {
                enable_swagger_ui: parse_var(
                    "ENABLE_SWAGGER_UI",
                    environment != Environment::Production,
                )?,
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(name.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

/// Accessor used across the crate; first call loads from env.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from("production".to_string()),
            Environment::Production
        );
        assert_eq!(Environment::from("PROD".to_string()), Environment::Production);
        assert_eq!(
            Environment::from("anything-else".to_string()),
            Environment::Development
        );
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_env().expect("defaults should load");
        assert!(!config.security.domain_blacklist.is_empty());
        assert!(config.dns.endpoint.starts_with("https://"));
        assert!(config.geo.endpoint.starts_with("https://"));
    }
}
