use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Probe target configuration
///
/// Every field has a default matching the classic single-container setup:
/// a server reachable under the hostname `mysql`, the `root` user, and the
/// password supplied through the `MYSQL_PASSWORD` environment variable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Database host
    #[serde(default = "default_host")]
    pub host: String,
    /// Database port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database user
    #[serde(default = "default_user")]
    pub user: String,
    /// Environment variable containing the password
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

fn default_host() -> String {
    "mysql".to_string()
}

const fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_password_env() -> String {
    "MYSQL_PASSWORD".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password_env: default_password_env(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a TOML file if it exists, otherwise defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            debug!("Loading configuration from {}", path.as_ref().display());
            Self::from_file(path)
        } else {
            debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the password from the configured environment variable
    ///
    /// An unset variable yields an empty password rather than an error; the
    /// connection attempt itself decides whether the credential is acceptable.
    #[must_use]
    pub fn resolve_password(&self) -> String {
        env::var(&self.password_env).unwrap_or_else(|_| {
            warn!(
                "Environment variable {} not found, using empty password",
                self.password_env
            );
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_probe_target() {
        let config = ProbeConfig::default();
        assert_eq!(config.host, "mysql");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.password_env, "MYSQL_PASSWORD");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ProbeConfig = toml::from_str("host = \"db.internal\"").unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
    }

    #[test]
    fn test_missing_password_env_yields_empty_credential() {
        let config = ProbeConfig {
            password_env: "DBPROBE_TEST_UNSET_PASSWORD_VAR".to_string(),
            ..ProbeConfig::default()
        };
        assert_eq!(config.resolve_password(), "");
    }

    #[test]
    fn test_password_env_lookup() {
        // Env var name unique to this test to avoid cross-test interference
        std::env::set_var("DBPROBE_TEST_PW_LOOKUP", "hunter2");
        let config = ProbeConfig {
            password_env: "DBPROBE_TEST_PW_LOOKUP".to_string(),
            ..ProbeConfig::default()
        };
        assert_eq!(config.resolve_password(), "hunter2");
        std::env::remove_var("DBPROBE_TEST_PW_LOOKUP");
    }
}
