//! Configuration management for the bridge.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults, and validated once before the server starts.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,

    /// Tools capability configuration.
    pub tools: ToolsConfig,

    /// SenseNet repository configuration.
    pub sensenet: SenseNetConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the tools capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Whether the tools capability is wired up at all.
    pub enabled: bool,
}

/// Connection settings for the SenseNet content repository.
#[derive(Clone, Serialize, Deserialize)]
pub struct SenseNetConfig {
    /// Base URL of the SenseNet service.
    pub service_url: Option<String>,

    /// API key used to authenticate against SenseNet.
    pub api_key: Option<String>,

    /// Simulated latency of the mock content service, in milliseconds.
    pub mock_delay_ms: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for SenseNetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenseNetConfig")
            .field("service_url", &self.service_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("mock_delay_ms", &self.mock_delay_ms)
            .finish()
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for SenseNetConfig {
    fn default() -> Self {
        Self {
            service_url: None,
            api_key: None,
            mock_delay_ms: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "sensenet-mcp-bridge".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
            tools: ToolsConfig::default(),
            sensenet: SenseNetConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Load the logging level on its own, so logging can be set up before
    /// the rest of the configuration is read.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SENSENET_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.http = HttpConfig::from_env();

        if let Ok(enabled) = std::env::var("MCP_TOOLS_ENABLED") {
            match parse_flag(&enabled) {
                Some(flag) => config.tools.enabled = flag,
                None => warn!("Ignoring invalid MCP_TOOLS_ENABLED: {}", enabled),
            }
        }

        if let Ok(url) = std::env::var("MCP_SENSENET_URL") {
            config.sensenet.service_url = Some(url);
        }

        if let Ok(api_key) = std::env::var("MCP_SENSENET_API_KEY") {
            config.sensenet.api_key = Some(api_key);
        }

        if let Ok(delay) = std::env::var("MCP_SENSENET_MOCK_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => config.sensenet.mock_delay_ms = ms,
                Err(_) => warn!("Ignoring invalid MCP_SENSENET_MOCK_DELAY_MS: {}", delay),
            }
        }

        config
    }

    /// Check the configuration before the server starts.
    pub fn validate(&self) -> Result<()> {
        if self.http.port == 0 {
            return Err(Error::config("HTTP port must be non-zero"));
        }

        if let Some(url) = &self.sensenet.service_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::config(format!(
                    "SenseNet service URL must start with http:// or https://, got '{}'",
                    url
                )));
            }
        }

        Ok(())
    }
}

/// Parse a boolean switch the way operators tend to write one.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
