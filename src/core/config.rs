//! Configuration management for the MCP server.
//!
//! Configuration is populated from defaults, an optional `.env` file, and
//! environment variables.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::tools::PageNaming;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Production base URL of the Atlas documentation API.
pub const DEFAULT_API_URL: &str = "https://atlas.cartograph.app/api";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote documentation API settings.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Settings for the outbound documentation API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,

    /// How page identifiers are addressed on the API.
    pub page_naming: PageNaming,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            page_naming: PageNaming::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "atlas-docs-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `ATLAS_API_URL` and `ATLAS_PAGE_NAMING` configure the docs API; server
    /// settings use the `MCP_` prefix (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_TRANSPORT`, ...).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("ATLAS_API_URL") {
            info!("Docs API base URL overridden from environment");
            config.api.base_url = base_url;
        }

        if let Ok(naming) = std::env::var("ATLAS_PAGE_NAMING") {
            config.api.page_naming = naming.parse::<PageNaming>().map_err(Error::config)?;
        }

        config.api.validate()?;

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

impl ApiConfig {
    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid API URL '{}': {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::config(format!(
                "unsupported API URL scheme '{}' in '{}'",
                other, self.base_url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("ATLAS_API_URL");
            std::env::remove_var("ATLAS_PAGE_NAMING");
        }
    }

    #[test]
    fn test_api_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("ATLAS_API_URL", "http://localhost:4000/api");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000/api");
        clear_env();
    }

    #[test]
    fn test_api_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.page_naming, PageNaming::Rooted);
    }

    #[test]
    fn test_page_naming_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("ATLAS_PAGE_NAMING", "bare");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.page_naming, PageNaming::Bare);
        clear_env();
    }

    #[test]
    fn test_invalid_page_naming_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("ATLAS_PAGE_NAMING", "sideways");
        }
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
        clear_env();
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let api = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(api.validate().is_err());

        let api = ApiConfig {
            base_url: "ftp://example.com/api".to_string(),
            ..ApiConfig::default()
        };
        assert!(api.validate().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "atlas-docs-mcp-server");
        assert!(config.api.validate().is_ok());
    }
}
