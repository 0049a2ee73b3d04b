//! Fraud check tool.
//!
//! Read-only: flags suspicious payments in a user's ledger. A payment is
//! suspicious if its amount strictly exceeds the threshold or its status is
//! failed. Two output levels: a count, or itemized reasons per record.

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
use crate::domains::payments::filters::{is_suspicious, suspicion_reasons};

/// Default amount threshold when the caller supplies none.
const DEFAULT_THRESHOLD: f64 = 100.0;

/// Parameters for the fraud check tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FraudCheckParams {
    /// The user whose ledger to scan.
    #[schemars(description = "User identifier")]
    pub user_id: String,

    /// Amounts strictly above this value are flagged (default: 100).
    #[schemars(description = "Amount threshold; payments strictly above it are flagged (default: 100)")]
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Include per-record reasons in the output (default: false).
    #[schemars(description = "Itemize each flagged payment with reasons (default: false)")]
    #[serde(default)]
    pub detailed: bool,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Fraud check tool implementation.
#[derive(Debug, Clone)]
pub struct FraudCheckTool;

impl FraudCheckTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fraud_check";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Scan a user's payments for suspicious activity: \
        amounts above a threshold or failed payments. Supports a basic count or a detailed \
        per-payment breakdown.";

    /// Validation schema, co-located with the registration.
    pub fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            FieldSchema::string("user_id").required().min_len(1),
            FieldSchema::number("threshold")
                .default_value(json!(DEFAULT_THRESHOLD))
                .positive(),
            FieldSchema::boolean("detailed").default_value(json!(false)),
        ])
    }

    /// Execute the tool logic against the shared context.
    pub fn execute(params: FraudCheckParams, ctx: &AppContext) -> Result<ToolResponse, ToolError> {
        let records = ctx.store.list(&params.user_id);
        let flagged: Vec<_> = records
            .iter()
            .filter(|r| is_suspicious(r, params.threshold))
            .collect();

        if flagged.is_empty() {
            return Ok(ToolResponse::with_metadata(
                format!(
                    "No suspicious payments found for user '{}' (threshold {:.2}).",
                    params.user_id, params.threshold
                ),
                json!({
                    "user_id": params.user_id,
                    "threshold": params.threshold,
                    "suspicious_count": 0,
                    "flagged_ids": [],
                }),
            ));
        }

        let mut text = format!(
            "Found {} suspicious payment(s) for user '{}' (threshold {:.2}).",
            flagged.len(),
            params.user_id,
            params.threshold
        );

        if params.detailed {
            for record in &flagged {
                text.push_str(&format!(
                    "\n- {}: {:.2} {} to {} [{}] - {}",
                    record.id,
                    record.amount,
                    record.currency,
                    record.payee,
                    record.status,
                    suspicion_reasons(record, params.threshold).join("; ")
                ));
            }
        }

        let flagged_ids: Vec<&str> = flagged.iter().map(|r| r.id.as_str()).collect();
        Ok(ToolResponse::with_metadata(
            text,
            json!({
                "user_id": params.user_id,
                "threshold": params.threshold,
                "suspicious_count": flagged.len(),
                "flagged_ids": flagged_ids,
            }),
        ))
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
            input_schema: cached_schema_for_type::<FraudCheckParams>(),
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
