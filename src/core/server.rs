//! Dispatch controller and server lifecycle.
//!
//! [`McpServer`] owns the tools capability and implements the two
//! operations exposed over HTTP: listing tools and calling a tool by name.
//! Whether tools are available is decided once at construction; request
//! handling only matches on the resolved [`ToolsCapability`].

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{Content, JsonObject};
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use super::config::Config;
use super::error::{DispatchError, Result};
use super::transport::HttpTransport;
use crate::domains::content::MockContentService;
use crate::domains::tools::{
    InvokeError, ToolArguments, ToolDescriptor, ToolRegistry, arguments_from_value,
    build_tool_registry,
};

/// Whether tools can be listed and called.
#[derive(Debug, Clone)]
pub enum ToolsCapability {
    /// Tools are wired up and served from this registry.
    Enabled(Arc<ToolRegistry>),

    /// The capability was not configured.
    Disabled,
}

/// Tool metadata as returned by the listing operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: JsonObject,
}

/// The main server handler.
///
/// Cheap to clone; all clones share the same configuration and registry.
#[derive(Debug, Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Resolved tools capability.
    tools: ToolsCapability,
}

impl McpServer {
    /// Create a new server with the given configuration.
    ///
    /// Validates the configuration and wires the content service and tool
    /// registry. Fails instead of starting half-configured.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let tools = if config.tools.enabled {
            let content_service = Arc::new(MockContentService::new(config.sensenet.clone()));
            ToolsCapability::Enabled(Arc::new(build_tool_registry(content_service)))
        } else {
            warn!("Tools capability disabled by configuration");
            ToolsCapability::Disabled
        };

        Ok(Self::with_tools(config, tools))
    }

    /// Create a server around an already resolved tools capability.
    pub fn with_tools(config: Config, tools: ToolsCapability) -> Self {
        if let ToolsCapability::Enabled(registry) = &tools {
            info!("Tools capability ready with {} tool(s)", registry.len());
        }
        Self {
            config: Arc::new(config),
            tools,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Serve the tool endpoints over HTTP until shutdown.
    pub async fn serve(self) -> Result<()> {
        let transport = HttpTransport::new(self.config.http.clone());
        transport.run(self).await?;
        Ok(())
    }

    /// List all available tools.
    ///
    /// Never fails: without a tools capability the list is simply empty.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        let registry = match &self.tools {
            ToolsCapability::Enabled(registry) => registry,
            ToolsCapability::Disabled => {
                warn!("Tool listing requested but the tools capability is not configured");
                return Vec::new();
            }
        };

        registry
            .list_all()
            .iter()
            .map(|descriptor| {
                let tool = descriptor.tool();
                ToolInfo {
                    name: tool.name.to_string(),
                    description: tool.description.as_ref().map(|d| d.to_string()),
                    input_schema: tool.input_schema.as_ref().clone(),
                }
            })
            .collect()
    }

    /// Call a tool by name.
    ///
    /// `body` may be any JSON value; only an object contributes arguments.
    /// `cancel` should fire when the caller goes away.
    #[instrument(skip(self, body, cancel))]
    pub async fn call_tool(
        &self,
        name: &str,
        body: Value,
        cancel: CancellationToken,
    ) -> std::result::Result<Vec<Content>, DispatchError> {
        let descriptor = self.resolve_tool(name)?;
        invoke(descriptor, arguments_from_value(body), cancel).await
    }

    /// Call a tool by name with an unparsed request body.
    ///
    /// The tool is resolved before the body is looked at, so an unknown
    /// tool is reported as such whatever was sent. An empty or malformed
    /// body is [`DispatchError::InvalidBody`].
    #[instrument(skip(self, body, cancel), fields(body_len = body.len()))]
    pub async fn call_tool_with_body(
        &self,
        name: &str,
        body: &[u8],
        cancel: CancellationToken,
    ) -> std::result::Result<Vec<Content>, DispatchError> {
        let descriptor = self.resolve_tool(name)?;
        let body: Value = serde_json::from_slice(body).map_err(|e| {
            warn!("Rejecting request body: {}", e);
            DispatchError::InvalidBody(e.to_string())
        })?;
        invoke(descriptor, arguments_from_value(body), cancel).await
    }

    fn resolve_tool(&self, name: &str) -> std::result::Result<&ToolDescriptor, DispatchError> {
        let registry = match &self.tools {
            ToolsCapability::Enabled(registry) => registry,
            ToolsCapability::Disabled => {
                warn!("Tool call rejected: tools capability is not configured");
                return Err(DispatchError::ServiceUnavailable(name.to_string()));
            }
        };

        registry.find_by_name(name).ok_or_else(|| {
            warn!("Tool not found in registry");
            DispatchError::NotFound(name.to_string())
        })
    }
}

/// Run a resolved tool, containing panics and classifying failures.
async fn invoke(
    descriptor: &ToolDescriptor,
    arguments: ToolArguments,
    cancel: CancellationToken,
) -> std::result::Result<Vec<Content>, DispatchError> {
    info!("Invoking tool with {} argument(s)", arguments.len());
    let outcome = AssertUnwindSafe(descriptor.handler().execute(&arguments, cancel))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(content)) => Ok(content),
        Ok(Err(InvokeError::Tool(err))) => {
            warn!("Tool error (code {}): {}", err.code().0, err);
            Err(DispatchError::Tool(err))
        }
        Ok(Err(InvokeError::Unexpected(err))) => {
            error!("Unexpected error while calling tool: {:#}", err);
            Err(DispatchError::Unexpected(err.to_string()))
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("Tool panicked: {}", message);
            Err(DispatchError::Unexpected(message))
        }
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool panicked".to_string()
    }
}
