//! Payment report prompt definition.
//!
//! Synthesizes a two-turn exchange: a user request describing the wanted
//! report, and an assistant turn containing the rendered report plus a
//! structured JSON payload (period bounds, per-status totals, rate table
//! snapshot) for a downstream report renderer.

use chrono::Utc;
use rmcp::model::{PromptArgument, PromptMessage, PromptMessageRole};
use serde_json::json;
use std::collections::HashMap;

use super::PromptDefinition;
use crate::core::context::AppContext;
use crate::domains::payments::{PaymentStatus, TimeWindow};
use crate::domains::prompts::error::PromptError;

/// Payment report prompt.
pub struct PaymentReportPrompt;

impl PromptDefinition for PaymentReportPrompt {
    const NAME: &'static str = "payment_report";
    const DESCRIPTION: &'static str = "Generate a payment activity report across all ledgers, \
        with per-status totals and the current rate table attached as structured data";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "format".to_string(),
                title: None,
                description: Some("Report format: 'text' or 'markdown' (default: text)".to_string()),
                required: Some(false),
            },
            PromptArgument {
                name: "period".to_string(),
                title: None,
                description: Some("Reporting period: 'all', 'week' or 'month' (default: all)".to_string()),
                required: Some(false),
            },
            PromptArgument {
                name: "detailed".to_string(),
                title: None,
                description: Some("Include per-status breakdown ('true'/'false', default: false)".to_string()),
                required: Some(false),
            },
        ]
    }

    fn build(
        arguments: &HashMap<String, String>,
        ctx: &AppContext,
    ) -> Result<Vec<PromptMessage>, PromptError> {
        let format = arguments.get("format").map(String::as_str).unwrap_or("text");
        let period = arguments.get("period").map(String::as_str).unwrap_or("all");
        let detailed = arguments
            .get("detailed")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let now = Utc::now();
        let window = TimeWindow::parse(period);
        let records = window.apply(ctx.store.snapshot_all(), now);

        let base = ctx.rates.base();
        let mut totals = serde_json::Map::new();
        let mut counts = serde_json::Map::new();
        let mut breakdown = Vec::new();
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ] {
            let in_status: Vec<_> = records.iter().filter(|r| r.status == status).collect();
            let total = ctx
                .rates
                .sum_in(
                    in_status.iter().map(|r| (r.amount, r.currency.as_str())),
                    base,
                )
                .map_err(|e| PromptError::internal(e.to_string()))?;
            totals.insert(status.to_string(), json!(total));
            counts.insert(status.to_string(), json!(in_status.len()));
            breakdown.push(format!(
                "- {}: {} payment(s) totalling {} {}",
                status,
                in_status.len(),
                total,
                base
            ));
        }

        // Period start: the window cutoff, or the earliest record for the
        // unbounded window.
        let period_start = window
            .cutoff(now)
            .or_else(|| records.iter().map(|r| r.timestamp).min())
            .unwrap_or(now);

        let mut rate_snapshot = serde_json::Map::new();
        for (code, rate) in ctx.rates.iter() {
            rate_snapshot.insert(code.to_string(), json!(rate));
        }

        let payload = json!({
            "period": {
                "label": window.label(),
                "start": period_start.to_rfc3339(),
                "end": now.to_rfc3339(),
            },
            "totals": { "currency": base, "by_status": totals },
            "counts": counts,
            "rates": { "base": base, "per_base_unit": rate_snapshot },
        });

        let request = format!(
            "Please prepare a {} payment report in {} format covering {}.",
            if detailed { "detailed" } else { "summary" },
            format,
            window.label()
        );

        let mut report = format!(
            "Payment report ({}): {} payment(s) recorded.",
            window.label(),
            records.len()
        );
        if detailed {
            for line in &breakdown {
                report.push_str(&format!("\n{}", line));
            }
        }
        report.push_str(&format!(
            "\n\nReport data:\n{}",
            serde_json::to_string_pretty(&payload)
                .map_err(|e| PromptError::internal(e.to_string()))?
        ));

        Ok(vec![
            PromptMessage::new_text(PromptMessageRole::User, request),
            PromptMessage::new_text(PromptMessageRole::Assistant, report),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::payments::NewPayment;
    use rmcp::model::PromptMessageContent;

    fn seeded_ctx() -> AppContext {
        let ctx = AppContext::for_tests();
        let seeds = [
            (100.0, "GBP", PaymentStatus::Completed),
            (200.0, "EUR", PaymentStatus::Pending),
            (50.0, "GBP", PaymentStatus::Failed),
        ];
        for (amount, currency, status) in seeds {
            ctx.store.append(
                "U1",
                NewPayment {
                    amount,
                    currency: currency.to_string(),
                    status,
                    payee: "Payee".to_string(),
                    ..Default::default()
                },
            );
        }
        ctx
    }

    fn message_text(message: &PromptMessage) -> &str {
        match &message.content {
            PromptMessageContent::Text { text } => text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_exchange_has_two_turns() {
        let ctx = seeded_ctx();
        let messages = PaymentReportPrompt::build(&HashMap::new(), &ctx).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, PromptMessageRole::User);
        assert_eq!(messages[1].role, PromptMessageRole::Assistant);
    }

    #[test]
    fn test_report_carries_structured_payload() {
        let ctx = seeded_ctx();
        let messages = PaymentReportPrompt::build(&HashMap::new(), &ctx).unwrap();
        let report = message_text(&messages[1]);

        let (_, payload) = report.split_once("Report data:\n").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed["totals"]["currency"], "GBP");
        // 200 EUR pending converted to GBP, accumulate then round.
        assert_eq!(parsed["totals"]["by_status"]["pending"], 173.91);
        assert_eq!(parsed["totals"]["by_status"]["completed"], 100.0);
        assert_eq!(parsed["totals"]["by_status"]["failed"], 50.0);
        assert_eq!(parsed["counts"]["pending"], 1);
        assert_eq!(parsed["rates"]["per_base_unit"]["JPY"], 180.0);
        assert!(parsed["period"]["start"].is_string());
    }

    #[test]
    fn test_detailed_flag_adds_breakdown() {
        let ctx = seeded_ctx();
        let mut arguments = HashMap::new();
        arguments.insert("detailed".to_string(), "true".to_string());
        let messages = PaymentReportPrompt::build(&arguments, &ctx).unwrap();

        assert!(message_text(&messages[0]).contains("detailed"));
        assert!(message_text(&messages[1]).contains("- pending:"));
    }

    #[test]
    fn test_empty_store_still_builds() {
        let ctx = AppContext::for_tests();
        let messages = PaymentReportPrompt::build(&HashMap::new(), &ctx).unwrap();
        assert!(message_text(&messages[1]).contains("0 payment(s)"));
    }
}
