//! Resources domain module.
//!
//! Read-only named data exposed to clients - currently the currency rate
//! table in two renderings, addressed directly or via a URI template with a
//! format selector.
//!
//! ## Architecture
//!
//! - `definitions/` - individual resource definitions (one file per topic)
//! - `registry.rs` - central resource registration
//! - `service.rs` - listing and reading
//! - `error.rs` - resource-specific error types

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
