//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata and a builder
//! that synthesizes the exchange from the shared context.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g. `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod payment_report;

pub use payment_report::PaymentReportPrompt;

use rmcp::model::{PromptArgument, PromptMessage};
use std::collections::HashMap;

use super::error::PromptError;
use crate::core::context::AppContext;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt produces.
    const DESCRIPTION: &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Build the message exchange from the arguments and shared context.
    fn build(
        arguments: &HashMap<String, String>,
        ctx: &AppContext,
    ) -> Result<Vec<PromptMessage>, PromptError>;
}
