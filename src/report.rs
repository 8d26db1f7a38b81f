//! Monthly report rendering.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::errors::BudgetError;
use crate::ledger::{Ledger, Month};

/// Display unit for sums; the ledger stores whole rubles.
pub const CURRENCY_UNIT: &str = "rubles";

/// Writes one line per transaction of `month`, in bucket insertion order,
/// into the artifact at `path`. An empty bucket writes nothing, leaving the
/// zero-length artifact as the "no content" signal.
///
/// Every line gets its own open/flush/close cycle, so a failure partway
/// through leaves the already-written prefix on disk instead of losing it.
pub fn write_month_report(
    ledger: &Ledger,
    month: Month,
    path: &Path,
) -> Result<(), BudgetError> {
    for (_, transaction) in ledger.transactions_in(month) {
        let mut file = OpenOptions::new().append(true).open(path)?;
        writeln!(
            file,
            "{}: {} {} -  {}",
            transaction.category.label(),
            transaction.sum,
            CURRENCY_UNIT,
            transaction.comment
        )?;
        file.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Transaction};
    use std::fs;

    #[test]
    fn lines_follow_insertion_order_and_format() {
        let mut ledger = Ledger::new();
        ledger.insert(
            Month::April,
            Transaction::new(Category::Food, 500, "lunch"),
        );
        ledger.insert(
            Month::April,
            Transaction::new(Category::Clothes, 1_200, "jacket"),
        );
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("April-report.txt");
        fs::File::create(&path).unwrap();

        write_month_report(&ledger, Month::April, &path).unwrap();

        let rendered = fs::read_to_string(&path).unwrap();
        assert_eq!(
            rendered,
            "Food: 500 rubles -  lunch\nClothes: 1200 rubles -  jacket\n"
        );
    }

    #[test]
    fn empty_month_writes_nothing() {
        let ledger = Ledger::new();
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("May-report.txt");
        fs::File::create(&path).unwrap();

        write_month_report(&ledger, Month::May, &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }
}
