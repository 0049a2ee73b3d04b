//! In-memory payment store.
//!
//! The store exclusively owns the mapping from user id to that user's
//! ledger (an insertion-ordered sequence of payments). Ledgers are created
//! lazily on first append and live for the process lifetime. The only
//! mutation is append; update and delete are not exposed.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::{debug, info};

use super::model::{NewPayment, PaymentRecord, PaymentStatus};

/// Source of payment identifiers. Injected so tests can supply a
/// deterministic generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Clock-plus-randomness generator: `pay_<unix_millis>_<6 alnum chars>`.
/// Collision resistance is best-effort, not cryptographic.
pub struct SystemIdGenerator;

impl IdGenerator for SystemIdGenerator {
    fn next_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        format!("pay_{}_{}", millis, suffix)
    }
}

/// Deterministic generator for tests: `pay_1`, `pay_2`, ...
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("pay_{}", n)
    }
}

/// In-memory mapping from user id to that user's payment ledger.
///
/// Appends are serialized behind a single lock; contention is expected to
/// be negligible and insertion order must be preserved. The lock is never
/// held across an await point.
pub struct PaymentStore {
    ledgers: RwLock<HashMap<String, Vec<PaymentRecord>>>,
    ids: Box<dyn IdGenerator>,
}

impl PaymentStore {
    /// Create an empty store with the given id source.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            ledgers: RwLock::new(HashMap::new()),
            ids,
        }
    }

    /// Seed a demo ledger for `user_123` so the server is exercisable
    /// out of the box.
    pub fn seed_demo_data(&self) {
        info!("Seeding demo payment data for user_123");
        let seeds = [
            (100.0, "GBP", PaymentStatus::Completed, "Acme Supplies"),
            (200.0, "EUR", PaymentStatus::Pending, "Continental Imports"),
            (50.0, "GBP", PaymentStatus::Failed, "Northside Services"),
        ];
        for (amount, currency, status, payee) in seeds {
            self.append(
                "user_123",
                NewPayment {
                    amount,
                    currency: currency.to_string(),
                    status,
                    payee: payee.to_string(),
                    source: Some("seed".to_string()),
                    ..Default::default()
                },
            );
        }
    }

    /// The ledger for a user. An unknown user is modeled as zero records,
    /// never as an error.
    pub fn list(&self, user_id: &str) -> Vec<PaymentRecord> {
        self.ledgers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Append a payment to a user's ledger, creating the ledger if absent.
    /// Fills in a generated id and the current timestamp when the caller
    /// did not supply them, and returns the stored record.
    pub fn append(&self, user_id: &str, draft: NewPayment) -> PaymentRecord {
        let record = PaymentRecord {
            id: draft.id.unwrap_or_else(|| self.ids.next_id()),
            amount: draft.amount,
            currency: draft.currency.to_ascii_uppercase(),
            status: draft.status,
            payee: draft.payee,
            description: draft.description,
            timestamp: draft.timestamp.unwrap_or_else(Utc::now),
            source: draft.source,
        };

        debug!(
            user_id,
            payment_id = %record.id,
            amount = record.amount,
            currency = %record.currency,
            "Appending payment"
        );

        let mut ledgers = self.ledgers.write().unwrap_or_else(|e| e.into_inner());
        ledgers
            .entry(user_id.to_string())
            .or_default()
            .push(record.clone());
        record
    }

    /// All records across every ledger. Used by the report prompt for
    /// store-wide aggregation.
    pub fn snapshot_all(&self) -> Vec<PaymentRecord> {
        self.ledgers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .flat_map(|ledger| ledger.iter().cloned())
            .collect()
    }

    /// Total number of records across all ledgers.
    pub fn record_count(&self) -> usize {
        self.ledgers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .map(|l| l.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> PaymentStore {
        PaymentStore::new(Box::new(SequentialIdGenerator::new()))
    }

    fn draft(amount: f64) -> NewPayment {
        NewPayment {
            amount,
            currency: "GBP".to_string(),
            payee: "Test Payee".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_user_lists_empty() {
        let store = test_store();
        assert!(store.list("never_seen").is_empty());
    }

    #[test]
    fn test_append_then_list_preserves_order() {
        let store = test_store();
        let first = store.append("u1", draft(10.0));
        let before = store.list("u1");

        let appended = store.append("u1", draft(20.0));
        let after = store.list("u1");

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&appended));
        assert_eq!(after[0], first);
    }

    #[test]
    fn test_append_generates_id_and_timestamp() {
        let store = test_store();
        let record = store.append("u1", draft(10.0));
        assert_eq!(record.id, "pay_1");

        let second = store.append("u1", draft(10.0));
        assert_eq!(second.id, "pay_2");
    }

    #[test]
    fn test_append_keeps_caller_supplied_id() {
        let store = test_store();
        let record = store.append(
            "u1",
            NewPayment {
                id: Some("custom_42".to_string()),
                ..draft(10.0)
            },
        );
        assert_eq!(record.id, "custom_42");
    }

    #[test]
    fn test_currency_stored_uppercase() {
        let store = test_store();
        let record = store.append(
            "u1",
            NewPayment {
                currency: "eur".to_string(),
                ..draft(10.0)
            },
        );
        assert_eq!(record.currency, "EUR");
    }

    #[test]
    fn test_ledgers_are_isolated_per_user() {
        let store = test_store();
        store.append("u1", draft(10.0));
        store.append("u2", draft(20.0));

        assert_eq!(store.list("u1").len(), 1);
        assert_eq!(store.list("u2").len(), 1);
        assert_eq!(store.record_count(), 2);
    }

    #[test]
    fn test_system_id_generator_shape() {
        let id = SystemIdGenerator.next_id();
        assert!(id.starts_with("pay_"));
        let suffix = id.rsplit('_').next().unwrap();
        assert_eq!(suffix.len(), 6);
    }

    #[test]
    fn test_seed_demo_data() {
        let store = test_store();
        store.seed_demo_data();
        let ledger = store.list("user_123");
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger[0].amount, 100.0);
        assert_eq!(ledger[1].currency, "EUR");
        assert_eq!(ledger[2].status, PaymentStatus::Failed);
    }
}
