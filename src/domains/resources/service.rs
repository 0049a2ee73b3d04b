//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Content is
//! rendered on read from the shared rate table, so both renderings always
//! reflect the same underlying data.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::context::AppContext;
use crate::domains::payments::RateTable;

/// URI prefix under which rate renderings are addressed.
const RATES_URI_PREFIX: &str = "payments://rates/";

/// An entry in the resource registry.
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Renderer from the rate table to the resource content.
    pub render: fn(&RateTable) -> Result<String, ResourceError>,
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Shared application context (rate table).
    ctx: Arc<AppContext>,

    /// Registry of available resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized access.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the shared context.
    pub fn new(ctx: Arc<AppContext>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.to_string(), entry))
            .collect();

        Self {
            ctx,
            resources,
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// A URI matching the rates template with an unrecognized format
    /// selector is an invalid-format error, not a generic miss.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = match self.resources.get(uri) {
            Some(entry) => entry,
            None => {
                return if let Some(format) = uri.strip_prefix(RATES_URI_PREFIX) {
                    warn!(uri, format, "Unknown rate rendering format requested");
                    Err(ResourceError::invalid_format(format))
                } else {
                    Err(ResourceError::not_found(uri))
                };
            }
        };

        let content = (entry.render)(&self.ctx.rates)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> ResourceService {
        ResourceService::new(Arc::new(AppContext::for_tests()))
    }

    #[tokio::test]
    async fn test_resource_service_lists_both_renderings() {
        let service = test_service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = test_service();
        let result = service.read_resource("payments://rates/json").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_unknown_format_is_invalid_format() {
        let service = test_service();
        let err = service
            .read_resource("payments://rates/yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidFormat(f) if f == "yaml"));
    }

    #[tokio::test]
    async fn test_read_unrelated_uri_is_not_found() {
        let service = test_service();
        let err = service
            .read_resource("payments://ledger/u1")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }
}
