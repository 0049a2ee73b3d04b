//! Record filtering utilities.
//!
//! Time-window filtering for summaries and reports, plus the predicate
//! filters used by the fraud-check tool.

use chrono::{DateTime, Duration, Utc};

use super::model::{PaymentRecord, PaymentStatus};

/// Symbolic time window for filtering records by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// No filtering.
    All,

    /// Records from the last 7 days.
    LastWeek,

    /// Records from the last 30 days.
    LastMonth,
}

impl TimeWindow {
    /// Lenient parse. Unrecognized values fall back to `All` rather than
    /// erroring, matching the tolerant tool surface.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "week" | "last_week" | "last 7 days" | "7d" => Self::LastWeek,
            "month" | "last_month" | "last month" | "30d" => Self::LastMonth,
            _ => Self::All,
        }
    }

    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all time",
            Self::LastWeek => "last 7 days",
            Self::LastMonth => "last 30 days",
        }
    }

    /// The cutoff instant for this window, or `None` for the identity
    /// filter. A timestamp exactly on the cutoff is retained.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::All => None,
            Self::LastWeek => Some(now - Duration::days(7)),
            Self::LastMonth => Some(now - Duration::days(30)),
        }
    }

    /// Retain records whose timestamp falls within the window.
    pub fn apply(&self, records: Vec<PaymentRecord>, now: DateTime<Utc>) -> Vec<PaymentRecord> {
        match self.cutoff(now) {
            None => records,
            Some(cutoff) => records
                .into_iter()
                .filter(|r| r.timestamp >= cutoff)
                .collect(),
        }
    }
}

/// Case-insensitive status equality.
pub fn has_status(record: &PaymentRecord, status: &str) -> bool {
    record.status.as_str().eq_ignore_ascii_case(status)
}

/// A record is suspicious if its amount strictly exceeds the threshold
/// (native currency units) or its status indicates failure.
pub fn is_suspicious(record: &PaymentRecord, threshold: f64) -> bool {
    record.amount > threshold || record.status == PaymentStatus::Failed
}

/// Itemized reasons a record was flagged, for detailed fraud output.
pub fn suspicion_reasons(record: &PaymentRecord, threshold: f64) -> Vec<String> {
    let mut reasons = Vec::new();
    if record.amount > threshold {
        reasons.push(format!(
            "amount {:.2} {} exceeds threshold {:.2}",
            record.amount, record.currency, threshold
        ));
    }
    if record.status == PaymentStatus::Failed {
        reasons.push("payment failed".to_string());
    }
    reasons
}
