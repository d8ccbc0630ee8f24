//! Tools domain module.
//!
//! This module handles all tool-related functionality for the server. Tools
//! are named, remotely invocable operations with a declared argument schema.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Parameter schemas and argument validation
//! - `registry.rs` - Tool descriptors and the startup-built registry
//! - `dispatcher.rs` - Request resolution, validation, and invocation
//! - `handlers.rs` - The handler trait implemented by every tool
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct, a schema, and implement `ToolHandler`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs` inside `build_tool_registry()`
//!
//! **No need to modify the dispatcher or the server!**

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;
mod schema;

pub use dispatcher::{Dispatcher, ErrorKind, ToolRequest, ToolResponse};
pub use error::ToolError;
pub use handlers::{ToolHandler, parse_params};
pub use registry::{ToolDescriptor, ToolRegistry, build_tool_registry};
pub use schema::{ParamSpec, ParamType, ToolSchema};
