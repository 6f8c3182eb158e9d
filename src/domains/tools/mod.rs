//! Tools domain module.
//!
//! This module handles all tool-related functionality for the server.
//! Tools are named operations that clients list and call with a JSON
//! argument object, receiving a list of content items back.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait and argument helpers
//! - `registry.rs` - Immutable tool registry and its builder
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolHandler`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `build_tool_registry()` in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::{InvokeError, ToolError};
pub use handlers::*;
pub use registry::{ToolDescriptor, ToolRegistry, ToolRegistryBuilder, build_tool_registry};
