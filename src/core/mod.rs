//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the bridge,
//! including error handling, configuration, the dispatch controller and the
//! HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{DispatchError, Error, Result};
pub use server::{McpServer, ToolsCapability};
pub use transport::{HttpConfig, HttpTransport};
