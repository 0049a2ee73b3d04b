//! Tool Registry - central registration and dispatch for all tools.
//!
//! `dispatch` is the transport-agnostic invocation surface: look the tool
//! up by name, validate arguments against its schema, run the handler, and
//! normalize the outcome into the response contract. A fault in one handler
//! is converted into an error-flagged response and never escapes to the
//! transport layer.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::definitions::{
    AddPaymentTool, FraudCheckTool, PaymentDetailsTool, PaymentSummaryTool,
};
use super::error::ToolError;
use super::response::ToolResponse;
use super::validation::ToolSchema;
use crate::core::context::AppContext;

/// Validate, execute, and normalize one tool invocation.
///
/// Shared by `dispatch` and by every rmcp route, so both paths apply the
/// same validation-before-effect ordering and the same error taxonomy.
pub(crate) fn run_tool<P, F>(
    name: &str,
    schema: &ToolSchema,
    args: &JsonObject,
    ctx: &AppContext,
    exec: F,
) -> CallToolResult
where
    P: serde::de::DeserializeOwned,
    F: FnOnce(P, &AppContext) -> Result<ToolResponse, ToolError>,
{
    debug!(tool = name, "Tool invocation received");

    let normalized = match schema.validate(args) {
        Ok(map) => map,
        Err(e) => {
            warn!(tool = name, field = %e.field, "Validation failed: {}", e);
            return ToolResponse::failure(e.to_string()).into_call_tool_result();
        }
    };

    let params: P = match serde_json::from_value(Value::Object(normalized)) {
        Ok(p) => p,
        Err(e) => {
            // Schema and params struct disagree; a registration bug, not
            // caller input.
            error!(tool = name, "Parameter decode failed after validation: {}", e);
            return ToolError::internal(e.to_string())
                .to_response()
                .into_call_tool_result();
        }
    };

    let outcome = catch_unwind(AssertUnwindSafe(|| exec(params, ctx)))
        .unwrap_or_else(|_| Err(ToolError::internal("handler panicked")));

    match outcome {
        Ok(response) => {
            info!(tool = name, error = response.is_error(), "Tool completed");
            response.into_call_tool_result()
        }
        Err(err) => {
            match &err {
                ToolError::Internal(detail) => {
                    error!(tool = name, detail = %detail, "Handler fault");
                }
                other => warn!(tool = name, "Tool failed: {}", other),
            }
            err.to_response().into_call_tool_result()
        }
    }
}

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    ctx: Arc<AppContext>,
}

impl ToolRegistry {
    /// Create a new tool registry over the shared context.
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddPaymentTool::NAME,
            FraudCheckTool::NAME,
            PaymentDetailsTool::NAME,
            PaymentSummaryTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// The single source of truth for the published tool surface; the
    /// router lists the same set.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddPaymentTool::to_tool(),
            FraudCheckTool::to_tool(),
            PaymentDetailsTool::to_tool(),
            PaymentSummaryTool::to_tool(),
        ]
    }

    /// Dispatch an invocation to the named tool.
    ///
    /// An unknown name is an error-flagged response, not a transport fault.
    pub fn dispatch(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        match name {
            AddPaymentTool::NAME => AddPaymentTool::handle(&arguments, &self.ctx),
            FraudCheckTool::NAME => FraudCheckTool::handle(&arguments, &self.ctx),
            PaymentDetailsTool::NAME => PaymentDetailsTool::handle(&arguments, &self.ctx),
            PaymentSummaryTool::NAME => PaymentSummaryTool::handle(&arguments, &self.ctx),
            unknown => {
                warn!("Unknown tool requested: {}", unknown);
                ToolError::NotFound(unknown.to_string())
                    .to_response()
                    .into_call_tool_result()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(AppContext::for_tests()))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"add_payment"));
        assert!(names.contains(&"fraud_check"));
        assert!(names.contains(&"payment_details"));
        assert!(names.contains(&"payment_summary"));
    }

    #[test]
    fn test_dispatch_known_tool() {
        let registry = test_registry();
        let result = registry.dispatch("payment_summary", args(json!({ "user_id": "u1" })));
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_dispatch_unknown_tool_is_error_flagged() {
        let registry = test_registry();
        let result = registry.dispatch("transfer_funds", args(json!({})));
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_dispatch_validation_failure_short_circuits() {
        let registry = test_registry();
        let before = registry.ctx.store.record_count();
        let result = registry.dispatch(
            "add_payment",
            args(json!({ "user_id": "u1", "amount": -5.0, "currency": "GBP", "payee": "X" })),
        );
        assert_eq!(result.is_error, Some(true));
        // Validation failure must not mutate the store.
        assert_eq!(registry.ctx.store.record_count(), before);
    }
}
