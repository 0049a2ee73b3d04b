//! Tool definitions module.
//!
//! One file per tool. Each tool declares its params struct, its validation
//! schema, an `execute()` with the core logic, and route/metadata builders.

pub mod add_payment;
pub mod fraud_check;
pub mod payment_details;
pub mod payment_summary;

pub use add_payment::{AddPaymentParams, AddPaymentTool};
pub use fraud_check::{FraudCheckParams, FraudCheckTool};
pub use payment_details::{PaymentDetailsParams, PaymentDetailsTool};
pub use payment_summary::{PaymentSummaryParams, PaymentSummaryTool};
