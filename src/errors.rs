use thiserror::Error;

use crate::ledger::TransactionId;

/// Error type that captures the crate's failure modes.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("transaction {0} not found")]
    NotFound(TransactionId),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A bulk-import failure, pinned to the offending line. Lines are numbered
/// from 1. Records parsed before this line stay committed; nothing after it
/// is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("import failed at line {line}: {kind}")]
pub struct ImportError {
    pub line: usize,
    pub kind: ImportErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportErrorKind {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("invalid sum `{0}`")]
    InvalidSum(String),
    #[error("missing `{0}` field")]
    MissingField(&'static str),
}
