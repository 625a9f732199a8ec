//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/market-service/config.toml`).
//! A missing file yields the defaults. `DATABASE_URL` overrides
//! `database.url`.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./market.db?mode=rwc"
//! max_connections = 10
//!
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//!
//! [relations]
//! on_delete = "restrict"   # or "cascade"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DeletePolicy;
use crate::infrastructure::DatabaseConfig;

/// Environment variable that overrides `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
    pub relations: RelationsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerSection {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(section: &DatabaseSection) -> Self {
        Self {
            url: section.url.clone(),
            max_connections: section.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing` filter directive, e.g. `info` or `market_api=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationsSection {
    /// What happens to products when their market or seller is deleted
    pub on_delete: DeletePolicy,
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.database.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be at least 1".into(),
            ));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}

/// `<config dir>/market-service/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("market-service").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.shutdown_timeout, 30);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.relations.on_delete, DeletePolicy::Restrict);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 9090

            [relations]
            on_delete = "cascade"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.relations.on_delete, DeletePolicy::Cascade);
        assert_eq!(cfg.server.address(), "0.0.0.0:9090");
    }

    #[test]
    fn unknown_delete_policy_is_a_parse_error() {
        let err = AppConfig::from_toml("[relations]\non_delete = \"nullify\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_log_format_fails_validation() {
        let mut cfg = AppConfig::default();
        cfg.logging.format = "xml".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_connections_fail_validation() {
        let mut cfg = AppConfig::default();
        cfg.database.max_connections = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = AppConfig::load(Path::new("/nonexistent/market-service.toml")).unwrap();
        assert_eq!(cfg.server.port, 8000);
    }

    #[test]
    fn database_section_converts_to_database_config() {
        let section = DatabaseSection {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        };
        let db = DatabaseConfig::from(&section);
        assert_eq!(db.url, "sqlite::memory:");
        assert_eq!(db.max_connections, 1);
    }
}
