//! Resources domain module.
//!
//! This module handles all resource-related functionality for the server.
//! Resources are named, remotely readable values exposed by a URI-style
//! identifier and not parameterized by a request body.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_templates, resource_uris};
pub use service::{
    DynamicResource, ResourceBody, ResourceContent, ResourceEntry, ResourceMetadata,
    ResourceReadResult, ResourceService,
};
