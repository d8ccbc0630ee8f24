//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the tool server,
//! including error handling, configuration, workspace path validation, server
//! lifecycle management, and the HTTP transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod workspace;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ToolServer;
pub use transport::{HttpConfig, HttpTransport};
pub use workspace::{WorkspacePathError, resolve_workspace_path};
