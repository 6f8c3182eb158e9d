//! Tool handler contract and argument helpers.
//!
//! Every tool implements [`ToolHandler`]. Arguments arrive as a loosely typed
//! [`ToolArguments`] map; handlers validate the names and types they need
//! with the helpers below before touching them.

use std::sync::Arc;

use rmcp::model::{Content, JsonObject};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::error::{InvokeError, ToolError};

/// Arguments for a tool call, keyed by argument name.
pub type ToolArguments = serde_json::Map<String, Value>;

/// Result of a tool invocation.
pub type ToolResult = Result<Vec<Content>, InvokeError>;

/// An invocable tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &str;

    /// Get the description of this tool.
    fn description(&self) -> &str;

    /// JSON schema describing the expected arguments.
    fn input_schema(&self) -> Arc<JsonObject>;

    /// Execute the tool with the given arguments.
    async fn execute(&self, arguments: &ToolArguments, cancel: CancellationToken) -> ToolResult;
}

/// Flatten a raw request body into tool arguments.
///
/// Only a JSON object yields arguments; arrays, scalars and `null` produce an
/// empty map and leave it to the tool to report what is missing.
pub fn arguments_from_value(body: Value) -> ToolArguments {
    match body {
        Value::Object(map) => map,
        _ => ToolArguments::new(),
    }
}

/// Fetch a required string argument.
pub fn required_str<'a>(arguments: &'a ToolArguments, name: &str) -> Result<&'a str, ToolError> {
    match arguments.get(name) {
        None | Some(Value::Null) => Err(ToolError::missing_argument(name)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ToolError::invalid_argument(name, "a string")),
    }
}
