//! Prompt service implementation.
//!
//! The PromptService manages prompt discovery and exchange synthesis.
//! Prompts are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

use super::error::PromptError;
use super::registry::{get_all_prompts, PromptEntry};
use crate::core::context::AppContext;

/// Service for managing and building prompts.
pub struct PromptService {
    /// Shared application context.
    ctx: Arc<AppContext>,

    /// Registry of available prompts, keyed by name.
    prompts: HashMap<&'static str, PromptEntry>,
}

impl PromptService {
    /// Create a new PromptService over the shared context.
    pub fn new(ctx: Arc<AppContext>) -> Self {
        info!("Initializing PromptService");

        let prompts = get_all_prompts()
            .into_iter()
            .map(|entry| (entry.name, entry))
            .collect();

        Self { ctx, prompts }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts.values().map(PromptEntry::to_prompt).collect()
    }

    /// Build the exchange for a named prompt.
    ///
    /// An unknown name is an error; a fault while building the exchange is
    /// contained and degraded to a generic apology exchange so the caller
    /// always receives well-formed messages.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let entry = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();
        for arg in &entry.arguments {
            if arg.required == Some(true) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(arg.name.clone()));
            }
        }

        let messages = match (entry.build)(&arguments, &self.ctx) {
            Ok(messages) => messages,
            Err(e) => {
                error!(prompt = name, error = %e, "Prompt build failed, degrading to apology exchange");
                apology_exchange()
            }
        };

        Ok(GetPromptResult {
            description: Some(entry.description.to_string()),
            messages,
        })
    }
}

/// Fallback exchange returned when a prompt builder faults.
fn apology_exchange() -> Vec<PromptMessage> {
    vec![
        PromptMessage::new_text(PromptMessageRole::User, "Please prepare a payment report."),
        PromptMessage::new_text(
            PromptMessageRole::Assistant,
            "Sorry, the payment report could not be generated right now. Please try again later.",
        ),
    ]
}
