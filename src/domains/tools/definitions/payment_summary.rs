//! Payment summary tool.
//!
//! Read-only: counts a user's payments over an optional time window and
//! totals them in a requested currency.

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
use crate::domains::payments::{TimeWindow, SUPPORTED_CURRENCIES};

/// Parameters for the payment summary tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PaymentSummaryParams {
    /// The user whose ledger to summarize.
    #[schemars(description = "User identifier")]
    pub user_id: String,

    /// Currency to express the total in (default: GBP).
    #[schemars(description = "Target currency code: GBP, EUR, USD or JPY (default: GBP)")]
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Time window: "all", "week" or "month" (default: all).
    #[schemars(description = "Time window: 'all', 'week' or 'month' (default: all)")]
    #[serde(default = "default_window")]
    pub window: String,
}

fn default_currency() -> String {
    "GBP".to_string()
}

fn default_window() -> String {
    "all".to_string()
}

/// Payment summary tool implementation.
#[derive(Debug, Clone)]
pub struct PaymentSummaryTool;

impl PaymentSummaryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "payment_summary";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Summarize a user's payments: count and total amount \
        converted to a target currency, optionally restricted to a recent time window.";

    /// Validation schema, co-located with the registration.
    pub fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            FieldSchema::string("user_id").required().min_len(1),
            FieldSchema::string("currency")
                .default_value(json!("GBP"))
                .exact_len(3)
                .one_of(SUPPORTED_CURRENCIES),
            FieldSchema::string("window").default_value(json!("all")),
        ])
    }

    /// Execute the tool logic against the shared context.
    pub fn execute(
        params: PaymentSummaryParams,
        ctx: &AppContext,
    ) -> Result<ToolResponse, ToolError> {
        let window = TimeWindow::parse(&params.window);
        let records = window.apply(ctx.store.list(&params.user_id), chrono::Utc::now());

        if records.is_empty() {
            return Ok(ToolResponse::with_metadata(
                format!(
                    "No payments found for user '{}' ({}).",
                    params.user_id,
                    window.label()
                ),
                json!({
                    "user_id": params.user_id,
                    "count": 0,
                    "total": 0.0,
                    "currency": params.currency.to_ascii_uppercase(),
                    "window": window.label(),
                }),
            ));
        }

        let total = ctx.rates.sum_in(
            records.iter().map(|r| (r.amount, r.currency.as_str())),
            &params.currency,
        )?;

        let currency = params.currency.to_ascii_uppercase();
        let text = format!(
            "User '{}' has {} payment(s) totalling {:.2} {} ({}).",
            params.user_id,
            records.len(),
            total,
            currency,
            window.label()
        );

        Ok(ToolResponse::with_metadata(
            text,
            json!({
                "user_id": params.user_id,
                "count": records.len(),
                "total": total,
                "currency": currency,
                "window": window.label(),
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
            input_schema: cached_schema_for_type::<PaymentSummaryParams>(),
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
