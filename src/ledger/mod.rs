//! Domain types for the month-indexed transaction ledger.

pub mod category;
pub mod ledger;
pub mod month;
pub mod transaction;

pub use category::{Category, UnknownCategory};
pub use ledger::{Ledger, TransactionId};
pub use month::{Month, UnknownMonth, ALL_MONTHS};
pub use transaction::Transaction;
