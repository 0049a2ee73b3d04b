//! Tool response contract.
//!
//! Every tool produces a `ToolResponse` with explicit success and failure
//! variants; the wire shape (rmcp `CallToolResult`) is produced only at the
//! edge. Callers inside the crate therefore always handle both outcomes.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Outcome of a tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    /// The operation completed. An empty lookup result is still a success;
    /// its text explains that nothing was found.
    Success {
        /// Human-readable summary. Must stand alone without the metadata.
        text: String,

        /// Optional machine-consumable payload (counts, totals, ids).
        /// Additive only - never required to interpret the text.
        metadata: Option<Value>,
    },

    /// The operation could not be satisfied. The message is always safe to
    /// show the caller; internal detail stays in the logs.
    Failure { message: String },
}

impl ToolResponse {
    /// A plain text success.
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success {
            text: text.into(),
            metadata: None,
        }
    }

    /// A success carrying a structured metadata payload.
    pub fn with_metadata(text: impl Into<String>, metadata: Value) -> Self {
        Self::Success {
            text: text.into(),
            metadata: Some(metadata),
        }
    }

    /// An error-flagged response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether this is the failure variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Convert into the rmcp wire shape.
    pub fn into_call_tool_result(self) -> CallToolResult {
        match self {
            Self::Success { text, metadata } => CallToolResult {
                content: vec![Content::text(text)],
                structured_content: metadata,
                is_error: Some(false),
                meta: None,
            },
            Self::Failure { message } => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_success_carries_text_block() {
        let result = ToolResponse::success("done").into_call_tool_result();
        assert_eq!(result.is_error, Some(false));
        assert!(result.structured_content.is_none());
        match &result.content[0].raw {
            RawContent::Text(t) => assert_eq!(t.text, "done"),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_metadata_is_additive() {
        let result = ToolResponse::with_metadata("3 payments", json!({ "count": 3 }))
            .into_call_tool_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({ "count": 3 })));
        // The text block is still present and non-empty.
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_failure_sets_error_flag() {
        let response = ToolResponse::failure("bad input");
        assert!(response.is_error());

        let result = response.into_call_tool_result();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(t) => assert_eq!(t.text, "bad input"),
            other => panic!("expected text content, got {:?}", other),
        }
    }
}
