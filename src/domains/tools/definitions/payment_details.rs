//! Payment details tool.
//!
//! Read-only: lists a user's payments, optionally filtered by status.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{cached_schema_for_type, ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::super::error::ToolError;
use super::super::registry::run_tool;
use super::super::response::ToolResponse;
use super::super::validation::{FieldSchema, ToolSchema};
use crate::core::context::AppContext;
use crate::domains::payments::filters::has_status;
use crate::domains::payments::{PaymentRecord, PaymentStatus};

/// Parameters for the payment details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PaymentDetailsParams {
    /// The user whose ledger to list.
    #[schemars(description = "User identifier")]
    pub user_id: String,

    /// Only list payments with this status.
    #[schemars(description = "Optional status filter: pending, completed or failed")]
    pub status: Option<String>,
}

/// Payment details tool implementation.
#[derive(Debug, Clone)]
pub struct PaymentDetailsTool;

impl PaymentDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "payment_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List a user's payments with full detail, optionally \
        filtered by status (pending, completed, failed).";

    /// Validation schema, co-located with the registration.
    pub fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            FieldSchema::string("user_id").required().min_len(1),
            FieldSchema::string("status").one_of(PaymentStatus::ALL),
        ])
    }

    /// Execute the tool logic against the shared context.
    pub fn execute(
        params: PaymentDetailsParams,
        ctx: &AppContext,
    ) -> Result<ToolResponse, ToolError> {
        let records = ctx.store.list(&params.user_id);
        let matching: Vec<&PaymentRecord> = match params.status.as_deref() {
            Some(status) => records.iter().filter(|r| has_status(r, status)).collect(),
            None => records.iter().collect(),
        };

        let filter_label = params
            .status
            .as_deref()
            .map(|s| format!(" with status '{}'", s.to_ascii_lowercase()))
            .unwrap_or_default();

        if matching.is_empty() {
            return Ok(ToolResponse::with_metadata(
                format!(
                    "No payments found for user '{}'{}.",
                    params.user_id, filter_label
                ),
                json!({ "user_id": params.user_id, "count": 0 }),
            ));
        }

        let mut text = format!(
            "{} payment(s) for user '{}'{}:",
            matching.len(),
            params.user_id,
            filter_label
        );
        for record in &matching {
            text.push_str(&format!(
                "\n- {}: {:.2} {} to '{}' [{}] at {}",
                record.id,
                record.amount,
                record.currency,
                record.payee,
                record.status,
                record.timestamp.format("%Y-%m-%d %H:%M UTC")
            ));
            if let Some(description) = &record.description {
                text.push_str(&format!(" - {}", description));
            }
        }

        let metadata = json!({
            "user_id": params.user_id,
            "count": matching.len(),
            "payments": matching,
        });

        Ok(ToolResponse::with_metadata(text, metadata))
    }

    /// Validate and run against raw arguments.
    pub fn handle(args: &JsonObject, ctx: &AppContext) -> CallToolResult {
        run_tool(Self::NAME, &Self::schema(), args, ctx, Self::execute)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PaymentDetailsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(ctx: Arc<AppContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |tcc: ToolCallContext<'_, S>| {
            let args = tcc.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move { Ok(Self::handle(&args, &ctx)) }.boxed()
        })
    }
}
