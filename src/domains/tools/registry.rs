//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - The immutable registry of available tools, built once at startup
//! - Lookup by exact name and ordered listing
//! - `build_tool_registry()`, the one place compiled-in tools are listed

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::{info, warn};

use super::definitions::SenseNetContentDetailsTool;
use super::handlers::ToolHandler;
use crate::domains::content::ContentService;

// ============================================================================
// Tool Descriptor
// ============================================================================

/// A registered tool: its MCP metadata plus the handler that runs it.
#[derive(Clone)]
pub struct ToolDescriptor {
    tool: Tool,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Build a descriptor from a handler, capturing its metadata.
    pub fn new(handler: Arc<dyn ToolHandler>) -> Self {
        let tool = Tool {
            name: handler.name().to_string().into(),
            description: Some(handler.description().to_string().into()),
            input_schema: handler.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        };
        Self { tool, handler }
    }

    /// The tool's unique name.
    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// The tool's MCP metadata.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// The handler invoked for calls to this tool.
    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.tool.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the immutable set of tools available to clients.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Start building a registry.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// All tools in registration order, one per name.
    pub fn list_all(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Find a tool by exact, case-sensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builder collecting handlers before the registry is frozen.
#[derive(Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistryBuilder {
    /// Register a tool handler.
    ///
    /// The first handler registered under a name wins; later ones are dropped.
    pub fn register(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        let descriptor = ToolDescriptor::new(handler);
        if self.tools.iter().any(|t| t.name() == descriptor.name()) {
            warn!(
                "Duplicate tool '{}' ignored; keeping the first registration",
                descriptor.name()
            );
            return self;
        }
        self.tools.push(descriptor);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> ToolRegistry {
        info!("Tool registry built with {} tool(s)", self.tools.len());
        ToolRegistry { tools: self.tools }
    }
}

/// Build the registry with all compiled-in tools.
///
/// This is the central place where tools are registered.
/// When adding a new tool, add it here.
pub fn build_tool_registry(content_service: Arc<dyn ContentService>) -> ToolRegistry {
    ToolRegistry::builder()
        .register(Arc::new(SenseNetContentDetailsTool::new(content_service)))
        .build()
}
