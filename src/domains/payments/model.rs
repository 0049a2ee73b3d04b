//! Payment record model.
//!
//! Core data types shared by the store, tools, resources, and prompts.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment has been submitted but not settled.
    Pending,

    /// Payment settled successfully.
    Completed,

    /// Payment was rejected or could not settle.
    Failed,
}

impl PaymentStatus {
    /// All statuses accepted by the tool surface, in their wire spelling.
    pub const ALL: &'static [&'static str] = &["pending", "completed", "failed"];

    /// Wire spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    /// Case-insensitive parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(format!("Unknown payment status: {}", other)),
        }
    }
}

/// A single payment owned by one user's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentRecord {
    /// Opaque unique identifier within the owning ledger.
    pub id: String,

    /// Amount in currency minor-unit precision. Always > 0.
    pub amount: f64,

    /// ISO-style currency code, uppercase, member of the supported set.
    pub currency: String,

    /// Settlement status.
    pub status: PaymentStatus,

    /// Recipient name. Non-empty, sanitized.
    pub payee: String,

    /// Optional free-text description. Sanitized, bounded length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation time of the record.
    pub timestamp: DateTime<Utc>,

    /// Optional provenance tag (e.g. which channel created the record).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A caller-supplied payment draft; the store fills in `id` and `timestamp`
/// when absent.
#[derive(Debug, Clone, Default)]
pub struct NewPayment {
    /// Caller-supplied identifier. The store never overwrites one.
    pub id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub payee: String,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Strip characters that could be interpreted as markup by a downstream
/// renderer. Applied to every free-text field before it enters the store.
pub fn sanitize_text(input: &str) -> String {
    input.chars().filter(|c| *c != '<' && *c != '>').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!("PENDING".parse::<PaymentStatus>(), Ok(PaymentStatus::Pending));
        assert_eq!("Completed".parse::<PaymentStatus>(), Ok(PaymentStatus::Completed));
        assert_eq!("failed".parse::<PaymentStatus>(), Ok(PaymentStatus::Failed));
        assert!("refunded".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }

    #[test]
    fn test_sanitize_strips_markup_characters() {
        assert_eq!(sanitize_text("Bob <script>"), "Bob script");
        assert_eq!(sanitize_text("plain text"), "plain text");
        assert_eq!(sanitize_text("<<>>"), "");
    }

    #[test]
    fn test_record_serialization_skips_empty_optionals() {
        let record = PaymentRecord {
            id: "pay_1".to_string(),
            amount: 10.0,
            currency: "GBP".to_string(),
            status: PaymentStatus::Pending,
            payee: "Alice".to_string(),
            description: None,
            timestamp: Utc::now(),
            source: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("source").is_none());
    }
}
