//! Tool-specific error types.

use thiserror::Error;

use super::response::ToolResponse;
use super::validation::ValidationError;
use crate::domains::payments::CurrencyError;

/// Errors that can occur while dispatching or executing a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments failed schema validation. Field-level detail is safe
    /// to surface since it describes the caller's own request.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A recognized-but-unsatisfiable domain condition.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Unexpected internal failure. The detail is logged, never surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into the caller-facing response. Internal detail is
    /// replaced with a generic message; everything else is safe as-is.
    pub fn to_response(&self) -> ToolResponse {
        match self {
            Self::Internal(_) => {
                ToolResponse::failure("An internal error occurred while handling the request.")
            }
            other => ToolResponse::failure(other.to_string()),
        }
    }
}
