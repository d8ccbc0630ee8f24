//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResource, ResourceContent};

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "server://info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Name, version, workspace path, and current time of this server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResource::ServerInfo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "server://info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }
}
