//! Central prompt registry.
//!
//! All available prompts are registered here. To add a new prompt, implement
//! `PromptDefinition` in `definitions/` and list it below.

use rmcp::model::{Prompt, PromptArgument, PromptMessage};
use std::collections::HashMap;

use super::definitions::{PaymentReportPrompt, PromptDefinition};
use super::error::PromptError;
use crate::core::context::AppContext;

/// An entry in the prompt registry.
pub struct PromptEntry {
    /// The unique name of the prompt.
    pub name: &'static str,

    /// A description of what the prompt produces.
    pub description: &'static str,

    /// The arguments this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Builder that synthesizes the exchange.
    pub build: fn(&HashMap<String, String>, &AppContext) -> Result<Vec<PromptMessage>, PromptError>,
}

impl PromptEntry {
    fn from_definition<P: PromptDefinition>() -> Self {
        Self {
            name: P::NAME,
            description: P::DESCRIPTION,
            arguments: P::arguments(),
            build: P::build,
        }
    }

    /// Convert to the protocol prompt descriptor.
    pub fn to_prompt(&self) -> Prompt {
        Prompt {
            name: self.name.to_string(),
            title: None,
            description: Some(self.description.to_string()),
            arguments: Some(self.arguments.clone()),
            icons: None,
            meta: None,
        }
    }
}

/// Get all registered prompts.
pub fn get_all_prompts() -> Vec<PromptEntry> {
    vec![PromptEntry::from_definition::<PaymentReportPrompt>()]
}

/// Get the names of all registered prompts.
pub fn prompt_names() -> Vec<&'static str> {
    get_all_prompts().into_iter().map(|entry| entry.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_payment_report() {
        assert_eq!(prompt_names(), vec!["payment_report"]);
    }

    #[test]
    fn test_prompt_descriptor_carries_arguments() {
        let prompts = get_all_prompts();
        let descriptor = prompts[0].to_prompt();
        let arguments = descriptor.arguments.unwrap();
        let names: Vec<_> = arguments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["format", "period", "detailed"]);
        assert!(arguments.iter().all(|a| a.required == Some(false)));
    }
}
