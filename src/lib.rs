#![doc(test(attr(deny(warnings))))]

//! Budgetapp keeps a personal spending ledger in monthly buckets, derives
//! budget metrics from a fixed salary model, and persists its full state as
//! a single JSON snapshot after every mutation.

pub mod budget;
pub mod errors;
pub mod import;
pub mod ledger;
pub mod report;
pub mod service;
pub mod storage;
pub mod utils;

pub use budget::BudgetConfig;
pub use errors::{BudgetError, ImportError, ImportErrorKind};
pub use ledger::{Category, Ledger, Month, Transaction, TransactionId};
pub use service::BudgetService;
pub use storage::{JsonStorage, StorageBackend};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgetapp tracing initialized.");
    });
}
