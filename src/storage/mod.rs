pub mod json_backend;

use std::path::PathBuf;

use crate::{
    errors::BudgetError,
    ledger::{Ledger, Month},
};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Abstraction over the durable byte sink/source for the snapshot blob and
/// for report artifacts. Carries no business logic.
pub trait StorageBackend: Send + Sync {
    /// Replaces the persisted snapshot with the full serialized ledger.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Loads the last snapshot; `Ok(None)` when none has been written yet.
    fn load(&self) -> Result<Option<Ledger>>;

    /// Creates a fresh, empty report artifact for `month` and returns its
    /// path. An existing artifact for the same month is truncated.
    fn report_file(&self, month: Month) -> Result<PathBuf>;
}

pub use json_backend::{decode_snapshot, encode_snapshot, JsonStorage};
