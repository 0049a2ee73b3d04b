//! Shared application context.
//!
//! The context carries the process-wide collaborators (payment store, rate
//! table) and is constructed explicitly in `McpServer::new`, then passed to
//! every tool route and service. No module-level singletons; tests build
//! isolated instances.

use super::config::Config;
use crate::domains::payments::{PaymentStore, RateTable, SystemIdGenerator};

/// Shared state handed to tool handlers, the resource service, and the
/// prompt service.
pub struct AppContext {
    /// The in-memory payment store.
    pub store: PaymentStore,

    /// The process-wide currency rate table.
    pub rates: RateTable,
}

impl AppContext {
    /// Build the context from configuration.
    pub fn new(config: &Config) -> Self {
        let store = PaymentStore::new(Box::new(SystemIdGenerator));
        if config.store.seed_demo_data {
            store.seed_demo_data();
        }
        Self {
            store,
            rates: RateTable::standard(),
        }
    }

    /// An empty context with deterministic ids, for unit tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::domains::payments::SequentialIdGenerator;
        Self {
            store: PaymentStore::new(Box::new(SequentialIdGenerator::new())),
            rates: RateTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_seeds_when_configured() {
        let config = Config::default();
        let ctx = AppContext::new(&config);
        assert_eq!(ctx.store.list("user_123").len(), 3);
    }

    #[test]
    fn test_context_skips_seeding_when_disabled() {
        let mut config = Config::default();
        config.store.seed_demo_data = false;
        let ctx = AppContext::new(&config);
        assert_eq!(ctx.store.record_count(), 0);
    }
}
