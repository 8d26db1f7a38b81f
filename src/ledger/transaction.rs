use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single spending record. Immutable once constructed; edits replace the
/// whole value rather than patching fields. Sums are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub category: Category,
    pub sum: i64,
    pub comment: String,
}

impl Transaction {
    pub fn new(category: Category, sum: i64, comment: impl Into<String>) -> Self {
        Self {
            category,
            sum,
            comment: comment.into(),
        }
    }
}
