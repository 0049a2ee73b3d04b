//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route over the shared context;
//! this module just assembles them for the transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{AddPaymentTool, FraudCheckTool, PaymentDetailsTool, PaymentSummaryTool};
use crate::core::context::AppContext;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<AppContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddPaymentTool::create_route(ctx.clone()))
        .with_route(FraudCheckTool::create_route(ctx.clone()))
        .with_route(PaymentDetailsTool::create_route(ctx.clone()))
        .with_route(PaymentSummaryTool::create_route(ctx))
}
