//! SenseNet content details tool definition.
//!
//! Looks up a single content item by ID or path through the configured
//! [`ContentService`] and returns its details as text.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{Content, JsonObject},
};
use schemars::JsonSchema;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::domains::content::{ContentService, ContentServiceError};
use crate::domains::tools::{ToolArguments, ToolError, ToolHandler, ToolResult, required_str};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the content details tool.
#[derive(Debug, Clone, JsonSchema)]
pub struct ContentDetailsParams {
    /// The ID or path of the content item.
    #[serde(rename = "contentId")]
    #[schemars(description = "The ID or path of the content item.")]
    pub content_id: String,
}

impl ContentDetailsParams {
    /// Validate and extract parameters from call arguments.
    pub fn from_arguments(arguments: &ToolArguments) -> Result<Self, ToolError> {
        Ok(Self {
            content_id: required_str(arguments, "contentId")?.to_string(),
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Content details tool - retrieves details of one SenseNet content item.
pub struct SenseNetContentDetailsTool {
    service: Arc<dyn ContentService>,
}

impl SenseNetContentDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "GetSenseNetContentDetails";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieves details for a specific content item from SenseNet.";

    /// Create the tool on top of a content service.
    pub fn new(service: Arc<dyn ContentService>) -> Self {
        Self { service }
    }
}

#[async_trait::async_trait]
impl ToolHandler for SenseNetContentDetailsTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<ContentDetailsParams>()
    }

    #[instrument(skip_all)]
    async fn execute(&self, arguments: &ToolArguments, cancel: CancellationToken) -> ToolResult {
        let params = ContentDetailsParams::from_arguments(arguments)?;
        info!("Content details requested for: {}", params.content_id);

        let details = self
            .service
            .get_content_details(&params.content_id, &cancel)
            .await
            .map_err(ToolError::from)?;

        Ok(vec![Content::text(details)])
    }
}

impl From<ContentServiceError> for ToolError {
    fn from(err: ContentServiceError) -> Self {
        warn!("Content service failed: {}", err);
        match err {
            ContentServiceError::Cancelled => ToolError::Cancelled,
            other => ToolError::execution_failed(other.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
