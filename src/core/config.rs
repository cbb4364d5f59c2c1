//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.
//! With nothing set, documents are resolved against the process working
//! directory and the server speaks MCP over stdio.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the item generator workflow instructions.
pub const DEFAULT_WORKFLOW_PATH: &str = "tools/itemgen/MCP/itemgen.md";

/// Default location of the Fabric Swagger definition.
pub const DEFAULT_SCHEMA_PATH: &str = "tools/itemgen/MCP/definition.json";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Where the served documents live.
    pub documents: DocumentsConfig,

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

/// Locations of the read-only documents served by the tools.
///
/// Both paths are relative to `root` and are echoed verbatim in the
/// not-found guidance, so keep them in the form a human would look for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Working root the document paths are resolved against.
    pub root: PathBuf,

    /// Path of the workflow instructions markdown.
    pub workflow_path: String,

    /// Path of the Swagger definition JSON.
    pub schema_path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            workflow_path: DEFAULT_WORKFLOW_PATH.to_string(),
            schema_path: DEFAULT_SCHEMA_PATH.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "TF-MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            documents: DocumentsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DOCS_ROOT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        if let Ok(root) = std::env::var("MCP_DOCS_ROOT") {
            config.documents.root = PathBuf::from(root);
        }

        if let Ok(path) = std::env::var("MCP_WORKFLOW_PATH") {
            config.documents.workflow_path = path;
        }

        if let Ok(path) = std::env::var("MCP_SCHEMA_PATH") {
            config.documents.schema_path = path;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }

    /// Check that the configuration can serve both tools.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        if self.documents.workflow_path.trim().is_empty() {
            return Err(Error::config("workflow document path must not be empty"));
        }
        if self.documents.schema_path.trim().is_empty() {
            return Err(Error::config("schema document path must not be empty"));
        }
        Ok(())
    }
}
