//! Add payment tool.
//!
//! The only mutating tool: appends a payment to a user's ledger. Free-text
//! fields are sanitized, the currency must be supported, and the amount must
//! be positive and under the transaction ceiling - all checked before the
//! store is touched.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{cached_schema_for_type, ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use super::super::error::ToolError;
use super::super::registry::run_tool;
use super::super::response::ToolResponse;
use super::super::validation::{FieldSchema, ToolSchema};
use crate::core::context::AppContext;
use crate::domains::payments::model::sanitize_text;
use crate::domains::payments::{
    NewPayment, PaymentStatus, MAX_TRANSACTION_AMOUNT, SUPPORTED_CURRENCIES,
};

/// Maximum accepted payee name length.
const MAX_PAYEE_LEN: usize = 100;

/// Maximum accepted description length.
const MAX_DESCRIPTION_LEN: usize = 250;

/// Parameters for the add payment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddPaymentParams {
    /// Owner of the ledger to append to.
    #[schemars(description = "User identifier")]
    pub user_id: String,

    /// Payment amount. Must be positive and at most 10,000.
    #[schemars(description = "Payment amount (0 < amount <= 10000)")]
    pub amount: f64,

    /// Currency code.
    #[schemars(description = "Currency code: GBP, EUR, USD or JPY")]
    pub currency: String,

    /// Recipient name.
    #[schemars(description = "Payee name (1-100 characters)")]
    pub payee: String,

    /// Optional free-text description.
    #[schemars(description = "Optional description (up to 250 characters)")]
    pub description: Option<String>,

    /// Initial status (default: pending).
    #[schemars(description = "Payment status: pending, completed or failed (default: pending)")]
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Structured output describing the stored record.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AddPaymentResult {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub timestamp: String,
}

/// Add payment tool implementation.
#[derive(Debug, Clone)]
pub struct AddPaymentTool;

impl AddPaymentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_payment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Record a new payment in a user's ledger. The amount \
        must be positive and at most 10,000; the currency must be one of GBP, EUR, USD, JPY.";

    /// Validation schema, co-located with the registration.
    pub fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            FieldSchema::string("user_id").required().min_len(1),
            FieldSchema::number("amount")
                .required()
                .positive()
                .max(MAX_TRANSACTION_AMOUNT),
            FieldSchema::string("currency")
                .required()
                .exact_len(3)
                .one_of(SUPPORTED_CURRENCIES),
            FieldSchema::string("payee")
                .required()
                .min_len(1)
                .max_len(MAX_PAYEE_LEN),
            FieldSchema::string("description").max_len(MAX_DESCRIPTION_LEN),
            FieldSchema::string("status")
                .default_value(json!("pending"))
                .one_of(PaymentStatus::ALL),
        ])
    }

    /// Execute the tool logic against the shared context.
    pub fn execute(params: AddPaymentParams, ctx: &AppContext) -> Result<ToolResponse, ToolError> {
        let status: PaymentStatus = params
            .status
            .parse()
            .map_err(ToolError::internal)?; // membership was validated; a miss here is a bug

        let record = ctx.store.append(
            &params.user_id,
            NewPayment {
                amount: params.amount,
                currency: params.currency,
                status,
                payee: sanitize_text(&params.payee),
                description: params.description.as_deref().map(sanitize_text),
                source: Some("tool".to_string()),
                ..Default::default()
            },
        );

        let text = format!(
            "Recorded payment {} of {:.2} {} to '{}' for user '{}'.",
            record.id, record.amount, record.currency, record.payee, params.user_id
        );

        let result = AddPaymentResult {
            id: record.id,
            user_id: params.user_id,
            amount: record.amount,
            currency: record.currency,
            status: record.status.to_string(),
            timestamp: record.timestamp.to_rfc3339(),
        };
        let metadata = serde_json::to_value(&result)
            .map_err(|e| ToolError::internal(e.to_string()))?;

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
            input_schema: cached_schema_for_type::<AddPaymentParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<AddPaymentResult>()),
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
