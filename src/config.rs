// src/config.rs

//! Configuration file parsing
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, CORS origins, request tracing
//! - [catalog] - Optional seed file loaded at startup
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//! cors_origins = ["https://cookbook.example.com"]
//!
//! [catalog]
//! seed = "/etc/cookbook/seed.toml"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// API bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allowed CORS origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Log every request through the tracing layer
    #[serde(default = "default_true")]
    pub trace_requests: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origins: Vec::new(),
            trace_requests: true,
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Catalog configuration section
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    /// Seed file inserted into the catalog at startup
    pub seed: Option<PathBuf>,
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CookbookConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if self.server.cors_origins.iter().any(|origin| origin.trim().is_empty()) {
            anyhow::bail!("server.cors_origins must not contain empty entries");
        }

        Ok(())
    }

    /// Get the parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))
    }

    /// Convert to the runtime server configuration
    #[cfg(feature = "server")]
    pub fn to_server_config(&self) -> Result<crate::server::ServerConfig> {
        Ok(crate::server::ServerConfig {
            bind_addr: self.bind_addr()?,
            cors_origins: self.server.cors_origins.clone(),
            trace_requests: self.server.trace_requests,
            seed_path: self.catalog.seed.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CookbookConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert!(config.server.trace_requests);
        assert!(config.catalog.seed.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = CookbookConfig::parse(
            r#"
[server]
bind = "0.0.0.0:9090"
cors_origins = ["https://cookbook.example.com"]
trace_requests = false

[catalog]
seed = "/srv/seed.toml"
"#,
        )
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().port(), 9090);
        assert_eq!(config.server.cors_origins.len(), 1);
        assert!(!config.server.trace_requests);
        assert_eq!(config.catalog.seed, Some(PathBuf::from("/srv/seed.toml")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = CookbookConfig::parse("[catalog]\nseed = \"seed.json\"\n").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_bind_rejected() {
        assert!(CookbookConfig::parse("[server]\nbind = \"not-an-address\"\n").is_err());
        assert!(CookbookConfig::parse("[server]\ncors_origins = [\" \"]\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CookbookConfig::load_or_default(Path::new("/nonexistent/cookbook.toml"));
        assert!(config.is_ok());
    }
}
