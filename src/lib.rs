//! Workbench Tool Server Library
//!
//! This crate provides an HTTP tool server that exposes file operations,
//! external API lookups, and a code-style checker as remotely callable
//! tools and resources.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool registry, the request dispatcher, and the tool definitions
//!   - **resources**: read-only values exposed by URI
//!   - **prompts**: prompt templates for consistent interactions
//!
//! # Example
//!
//! ```rust,no_run
//! use workbench_mcp_server::{core::ToolServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ToolServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
