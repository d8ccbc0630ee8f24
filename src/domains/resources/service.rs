//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Static
//! resources are registered from `registry.rs` into a URI-keyed map;
//! `workspace://{filename}` URIs are resolved dynamically against the
//! workspace root (text, or a base64 blob for non-UTF-8 files).
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::core::workspace::resolve_workspace_path;

use super::error::ResourceError;
use super::registry::{get_all_resources, resource_templates};

/// URI prefix for workspace file resources.
const WORKSPACE_URI_PREFIX: &str = "workspace://";

/// Metadata describing a resource in listings.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceMetadata {
    /// The URI (or URI template) of the resource.
    pub uri: String,

    /// The display name of the resource.
    pub name: String,

    /// A description of the resource.
    pub description: String,

    /// The MIME type of the resource content.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub metadata: ResourceMetadata,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation at read time.
    Dynamic(DynamicResource),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResource {
    /// Server information (name, version, workspace, timestamp).
    ServerInfo,
}

/// The result of reading a resource.
#[derive(Debug, Clone)]
pub struct ResourceReadResult {
    /// The URI that was read.
    pub uri: String,

    /// The MIME type of the content.
    pub mime_type: String,

    /// The content body.
    pub body: ResourceBody,
}

/// Resource content body: text, or base64 for binary files.
#[derive(Debug, Clone)]
pub enum ResourceBody {
    Text(String),
    Blob(String),
}

impl ResourceReadResult {
    /// JSON representation returned over the transport.
    pub fn to_json(&self) -> Value {
        match &self.body {
            ResourceBody::Text(text) => serde_json::json!({
                "uri": self.uri,
                "mimeType": self.mime_type,
                "text": text,
            }),
            ResourceBody::Blob(blob) => serde_json::json!({
                "uri": self.uri,
                "mimeType": self.mime_type,
                "blob": blob,
            }),
        }
    }
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Server configuration (workspace root, server identity).
    config: Arc<Config>,

    /// Registry of static resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: HashMap::new(),
        };

        service.register_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.metadata.uri);
        self.resources.insert(entry.metadata.uri.clone(), entry);
    }

    /// List all available resources, including the workspace file template.
    pub async fn list_resources(&self) -> Vec<ResourceMetadata> {
        let mut listed: Vec<_> = self
            .resources
            .values()
            .map(|entry| entry.metadata.clone())
            .collect();
        listed.sort_by(|a, b| a.uri.cmp(&b.uri));
        listed.extend(resource_templates());
        listed
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ResourceReadResult, ResourceError> {
        if let Some(entry) = self.resources.get(uri) {
            return match &entry.content {
                ResourceContent::Text(text) => Ok(ResourceReadResult {
                    uri: uri.to_string(),
                    mime_type: entry.metadata.mime_type.clone(),
                    body: ResourceBody::Text(text.clone()),
                }),
                ResourceContent::Dynamic(dynamic) => self.resolve_dynamic(uri, entry, dynamic),
            };
        }

        if let Some(filename) = uri.strip_prefix(WORKSPACE_URI_PREFIX) {
            return self.read_workspace_file(uri, filename);
        }

        Err(ResourceError::not_found(uri))
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic(
        &self,
        uri: &str,
        entry: &ResourceEntry,
        dynamic: &DynamicResource,
    ) -> Result<ResourceReadResult, ResourceError> {
        match dynamic {
            DynamicResource::ServerInfo => {
                let info = serde_json::json!({
                    "server": self.config.server.name,
                    "version": self.config.server.version,
                    "workspace": self.config.workspace.root.display().to_string(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                });

                Ok(ResourceReadResult {
                    uri: uri.to_string(),
                    mime_type: entry.metadata.mime_type.clone(),
                    body: ResourceBody::Text(
                        serde_json::to_string_pretty(&info)
                            .map_err(|e| ResourceError::internal(e.to_string()))?,
                    ),
                })
            }
        }
    }

    /// Read a file from the workspace as a resource.
    fn read_workspace_file(
        &self,
        uri: &str,
        filename: &str,
    ) -> Result<ResourceReadResult, ResourceError> {
        let path = resolve_workspace_path(&self.config.workspace.root, filename)
            .map_err(|e| ResourceError::invalid_uri(e.to_string()))?;

        if !path.is_file() {
            return Err(ResourceError::not_found(uri));
        }

        let bytes = fs::read(&path)?;
        let (mime_type, body) = match String::from_utf8(bytes) {
            Ok(text) => ("text/plain".to_string(), ResourceBody::Text(text)),
            Err(e) => (
                "application/octet-stream".to_string(),
                ResourceBody::Blob(
                    base64::engine::general_purpose::STANDARD.encode(e.into_bytes()),
                ),
            ),
        };

        Ok(ResourceReadResult {
            uri: uri.to_string(),
            mime_type,
            body,
        })
    }
}
