//! Tools domain module.
//!
//! Tool invocations flow through a single pipeline: look up the named tool,
//! validate raw arguments against its declarative schema, execute the
//! handler against the shared context, and normalize the outcome into the
//! response contract.
//!
//! ## Architecture
//!
//! - `definitions/` - individual tool implementations (one file per tool)
//! - `validation.rs` - declarative schemas and the generic validator
//! - `response.rs` - the success/failure response contract
//! - `router.rs` - dynamic ToolRouter builder for the transport
//! - `registry.rs` - central registry and transport-agnostic dispatch
//! - `error.rs` - tool-specific error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, schema and execute()
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` and its dispatch arm in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod response;
pub mod router;
pub mod validation;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use response::ToolResponse;
pub use router::build_tool_router;
pub use validation::{Constraint, FieldSchema, FieldType, ToolSchema, ValidationError};
