//! Tool-specific error types.

use rmcp::model::ErrorCode;
use thiserror::Error;

/// Errors a tool reports about its own invocation.
///
/// Each variant carries an MCP error code; the HTTP layer surfaces these
/// as client errors.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument was absent from the call.
    #[error("Required argument '{0}' was not provided.")]
    MissingArgument(String),

    /// An argument was present but had the wrong shape.
    #[error("Invalid value for argument '{name}': expected {expected}.")]
    InvalidArgument { name: String, expected: String },

    /// The tool ran but could not produce a result.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The caller went away before the tool finished.
    #[error("Tool execution was cancelled")]
    Cancelled,
}

impl ToolError {
    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            expected: expected.into(),
        }
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// The MCP error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingArgument(_) | Self::InvalidArgument { .. } => ErrorCode::INVALID_PARAMS,
            Self::ExecutionFailed(_) | Self::Cancelled => ErrorCode::INTERNAL_ERROR,
        }
    }
}

/// Any failure raised while invoking a tool.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The tool reported an error about the call.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Anything else: a bug or an unanticipated failure inside the tool.
    #[error("{0}")]
    Unexpected(#[from] anyhow::Error),
}
