//! SenseNet MCP Bridge Library
//!
//! This crate exposes SenseNet content-retrieval operations through the Model
//! Context Protocol (MCP) tool contract over plain HTTP.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the dispatch controller
//!   (`McpServer`) and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool registry and tool definitions
//!   - **content**: the content service used by tools
//!
//! # Example
//!
//! ```rust,no_run
//! use sensenet_mcp_bridge::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     server.serve().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, DispatchError, Error, McpServer, Result};
