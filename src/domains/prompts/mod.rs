//! Prompts domain module.
//!
//! Synthesized conversational exchanges built from live store data - each
//! prompt returns a user request and an assistant answer carrying both a
//! human-readable report and a structured payload.
//!
//! ## Architecture
//!
//! - `definitions/` - individual prompt definitions (one file per prompt)
//! - `registry.rs` - central prompt registration
//! - `service.rs` - listing and exchange synthesis
//! - `error.rs` - prompt-specific error types

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names, PromptEntry};
pub use service::PromptService;
