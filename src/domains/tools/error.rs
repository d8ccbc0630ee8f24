//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool, or a file it operates on, was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A tool with the same name was already registered.
    /// Raised only at startup, where it aborts server initialization.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// The tool execution failed.
    #[error("Execution failed: {0}")]
    Execution(String),

    /// I/O failure inside a handler.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Outbound HTTP failure inside a handler.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}
