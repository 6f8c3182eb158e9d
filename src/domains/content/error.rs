//! Content service error types.

use thiserror::Error;

/// Errors that can occur while fetching content from the repository.
///
/// These never reach HTTP callers directly: tools translate them into
/// [`ToolError`](crate::domains::tools::ToolError) first.
#[derive(Debug, Error)]
pub enum ContentServiceError {
    /// The request was cancelled before the repository answered.
    #[error("Content request was cancelled")]
    Cancelled,

    /// The remote repository reported a failure or could not be reached.
    #[error("Content repository error: {0}")]
    Remote(String),
}

impl ContentServiceError {
    /// Create a new "remote" error.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}
