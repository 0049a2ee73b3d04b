//! Payments domain module.
//!
//! Domain leaves shared by tools, resources, and prompts:
//!
//! - `model.rs` - payment record types and text sanitization
//! - `store.rs` - the in-memory user-ledger store and id generation
//! - `currency.rs` - the rate table and conversion arithmetic
//! - `filters.rs` - time-window and predicate filters

pub mod currency;
pub mod filters;
pub mod model;
pub mod store;

pub use currency::{CurrencyError, RateTable, MAX_TRANSACTION_AMOUNT, SUPPORTED_CURRENCIES};
pub use filters::TimeWindow;
pub use model::{NewPayment, PaymentRecord, PaymentStatus};
pub use store::{IdGenerator, PaymentStore, SequentialIdGenerator, SystemIdGenerator};
