//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use super::definitions::{ResourceDefinition, ServerInfoResource, StyleGuideResource};
use super::service::{ResourceEntry, ResourceMetadata};

/// Build a ResourceEntry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    ResourceEntry {
        metadata: ResourceMetadata {
            uri: R::URI.to_string(),
            name: R::NAME.to_string(),
            description: R::DESCRIPTION.to_string(),
            mime_type: R::MIME_TYPE.to_string(),
        },
        content: R::content(),
    }
}

/// Get all registered static resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ServerInfoResource>(),
        build_resource::<StyleGuideResource>(),
    ]
}

/// Parameterized resource templates resolved by the service at read time.
pub fn resource_templates() -> Vec<ResourceMetadata> {
    vec![ResourceMetadata {
        uri: "workspace://{filename}".to_string(),
        name: "Workspace Files".to_string(),
        description: "Read files from the workspace directory by filename".to_string(),
        mime_type: "text/plain".to_string(),
    }]
}

/// Get the list of all static resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![ServerInfoResource::URI, StyleGuideResource::URI]
}
