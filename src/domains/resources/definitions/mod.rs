//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata, and a
//! renderer over the shared rate table.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g. `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod currency_rates;

pub use currency_rates::{RatesJsonResource, RatesTextResource};

use super::error::ResourceError;
use crate::domains::payments::RateTable;

/// Trait for resource definitions.
///
/// Each resource provides metadata and a pure renderer from the rate table
/// to its content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Render the resource content from the rate table.
    fn render(rates: &RateTable) -> Result<String, ResourceError>;
}
