//! Fabric item generator MCP server.
//!
//! Serves two read-only tools to coding agents over the Model Context
//! Protocol: the properties item post-generation workflow and the Fabric
//! Swagger definition. Also ships the callout filter used when rendering
//! the provider documentation.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **documents**: reading the served files and describing failures
//!   - **tools**: the MCP tools built on top of the documents
//! - **markdown**: the documentation callout filter
//!
//! # Example
//!
//! ```rust,no_run
//! use itemgen_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod markdown;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
