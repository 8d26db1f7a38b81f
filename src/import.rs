//! Bulk import of pipe-delimited transaction records.
//!
//! One record per line, `CATEGORY|sum|comment`. Parsing is fail-fast: the
//! first malformed line aborts the import, records before it stay committed,
//! lines after it are never read. There is no transactional rollback.

use crate::errors::{ImportError, ImportErrorKind};
use crate::ledger::Transaction;

/// Parses one import line. `number` is the 1-based line position used for
/// error reporting. The comment is taken verbatim and may itself contain
/// `|` characters.
pub fn parse_line(line: &str, number: usize) -> Result<Transaction, ImportError> {
    let fail = |kind| ImportError { line: number, kind };

    let mut fields = line.splitn(3, '|');
    let category_token = match fields.next() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(fail(ImportErrorKind::MissingField("category"))),
    };
    let sum_token = fields
        .next()
        .ok_or_else(|| fail(ImportErrorKind::MissingField("sum")))?;
    let comment = fields
        .next()
        .ok_or_else(|| fail(ImportErrorKind::MissingField("comment")))?;

    let category = category_token
        .parse()
        .map_err(|_| fail(ImportErrorKind::UnknownCategory(category_token.to_string())))?;
    let sum = sum_token
        .parse()
        .map_err(|_| fail(ImportErrorKind::InvalidSum(sum_token.to_string())))?;

    Ok(Transaction::new(category, sum, comment))
}
