//! Error types and handling for the bridge.
//!
//! [`Error`] covers startup and infrastructure failures. [`DispatchError`] is
//! the outcome of a failed tool call as seen by the dispatch layer, one
//! variant per HTTP-visible failure class.

use thiserror::Error;

use crate::domains::tools::ToolError;

/// A specialized Result type for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for startup and infrastructure.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors (binding, serving).
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Failure of a tool call, classified for the caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tools capability was never wired up.
    #[error("Tools capability is not configured; tool '{0}' cannot be called.")]
    ServiceUnavailable(String),

    /// No tool is registered under the requested name.
    #[error("Tool '{0}' not found.")]
    NotFound(String),

    /// The request body could not be read as JSON.
    #[error("The request body is not valid JSON: {0}")]
    InvalidBody(String),

    /// The tool rejected the call or reported a failure.
    #[error(transparent)]
    Tool(ToolError),

    /// Anything else that went wrong while the tool ran.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
