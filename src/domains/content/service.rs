//! Content service contract.

use tokio_util::sync::CancellationToken;

use super::error::ContentServiceError;

/// Access to content items stored in the external repository.
///
/// Implementations must not block the runtime while waiting on the
/// repository and must return [`ContentServiceError::Cancelled`] promptly
/// once `cancel` fires.
#[async_trait::async_trait]
pub trait ContentService: Send + Sync {
    /// Fetch a textual description of the content item with the given ID or path.
    async fn get_content_details(
        &self,
        content_id: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ContentServiceError>;
}
