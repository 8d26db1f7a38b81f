//! `BudgetService` coordinates the in-memory ledger, snapshot persistence,
//! and the derived budget metrics. It is the single entry point the outer
//! transport layer talks to.

use std::io::BufRead;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, warn};

use crate::budget::BudgetConfig;
use crate::errors::BudgetError;
use crate::import;
use crate::ledger::{Ledger, Month, Transaction, TransactionId};
use crate::report;
use crate::storage::{JsonStorage, StorageBackend};
use crate::utils::calendar::days_in_month;

type Result<T> = std::result::Result<T, BudgetError>;

/// Owned facade over the ledger. All mutations take `&mut self`, so
/// exclusive ownership is the locking discipline: at most one mutation is in
/// flight, and a shared deployment wraps the service in a lock of its
/// choosing. Every successful mutation rewrites the full snapshot.
pub struct BudgetService {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    config: BudgetConfig,
    /// Allowance per day, fixed once from the length of the month active at
    /// construction time. Deliberately not re-derived on later calls.
    daily_budget: i64,
}

impl BudgetService {
    /// Rehydrates the ledger from the last snapshot. A missing snapshot
    /// starts empty; a corrupt one is logged and also starts empty, so a
    /// damaged data file never takes the process down.
    pub fn new(storage: Box<dyn StorageBackend>, config: BudgetConfig) -> Self {
        let ledger = match storage.load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => Ledger::new(),
            Err(err) => {
                warn!("discarding unreadable snapshot, starting empty: {err}");
                Ledger::new()
            }
        };
        let daily_budget = config.daily_budget(days_in_month(today()));
        debug!(
            transactions = ledger.transaction_count(),
            next_id = ledger.next_id(),
            "ledger rehydrated"
        );
        Self {
            ledger,
            storage,
            config,
            daily_budget,
        }
    }

    /// Opens the default filesystem storage and reads the budget constants
    /// override file if one exists.
    pub fn open_default() -> Result<Self> {
        let storage = JsonStorage::new_default()?;
        let config = BudgetConfig::load_or_default(&storage.config_path())?;
        Ok(Self::new(Box::new(storage), config))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Files the transaction under the current calendar month, persists the
    /// snapshot, and returns the freshly allocated identifier.
    pub fn add(&mut self, transaction: Transaction) -> Result<TransactionId> {
        self.add_in(Month::from_date(today()), transaction)
    }

    /// Same as [`add`](Self::add) with an explicit month bucket.
    pub fn add_in(&mut self, month: Month, transaction: Transaction) -> Result<TransactionId> {
        let backup = self.ledger.clone();
        let id = self.ledger.insert(month, transaction);
        self.persist(backup)?;
        debug!(id, month = %month, "transaction added");
        Ok(id)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.ledger.get(id)
    }

    /// Replaces the transaction wholesale, keeping its bucket and position,
    /// and persists the snapshot. An unknown id performs no write.
    pub fn edit(&mut self, id: TransactionId, transaction: Transaction) -> Result<Transaction> {
        let backup = self.ledger.clone();
        if self.ledger.replace(id, transaction.clone()).is_none() {
            return Err(BudgetError::NotFound(id));
        }
        self.persist(backup)?;
        debug!(id, "transaction replaced");
        Ok(transaction)
    }

    /// Removes the transaction and reports whether it existed. The snapshot
    /// is persisted on removal; the original system skipped that save, which
    /// made a delete silently reappear on restart.
    pub fn delete(&mut self, id: TransactionId) -> Result<bool> {
        let backup = self.ledger.clone();
        if self.ledger.remove(id).is_none() {
            return Ok(false);
        }
        self.persist(backup)?;
        debug!(id, "transaction deleted");
        Ok(true)
    }

    /// Empties the store and persists the cleared state. The identifier
    /// counter keeps running: ids are never reused, even after a clear.
    pub fn delete_all(&mut self) -> Result<()> {
        let backup = self.ledger.clone();
        self.ledger.clear();
        self.persist(backup)?;
        debug!("ledger cleared");
        Ok(())
    }

    /// Total spend filed under `month`; zero for an empty or absent bucket.
    pub fn month_spend(&self, month: Month) -> i64 {
        self.ledger.month_spend(month)
    }

    /// Monthly allowance minus the current month's spend, recomputed fresh
    /// on every call.
    pub fn balance(&self) -> i64 {
        self.config.monthly_allowance() - self.month_spend(Month::from_date(today()))
    }

    /// Allowance per day of the startup month. Fixed per process.
    pub fn daily_budget(&self) -> i64 {
        self.daily_budget
    }

    /// How far ahead of (or behind) the daily budget the month is so far.
    pub fn daily_balance(&self) -> i64 {
        let now = today();
        self.daily_budget * i64::from(now.day()) - self.month_spend(Month::from_date(now))
    }

    pub fn vacation_bonus(&self, days: u32) -> i64 {
        self.config.vacation_bonus(days)
    }

    pub fn salary_with_vacation(
        &self,
        vacation_days: u32,
        vacation_working_days: u32,
        working_days_in_month: u32,
    ) -> Result<i64> {
        self.config
            .salary_with_vacation(vacation_days, vacation_working_days, working_days_in_month)
    }

    /// Renders the month's transactions into a fresh report artifact and
    /// returns its path. An empty month yields a zero-length file.
    pub fn create_monthly_report(&self, month: Month) -> Result<PathBuf> {
        let path = self.storage.report_file(month)?;
        report::write_month_report(&self.ledger, month, &path)?;
        debug!(month = %month, path = %path.display(), "report written");
        Ok(path)
    }

    /// Imports pipe-delimited records, committing each good line before the
    /// next is read. Fail-fast: the first malformed line aborts the import
    /// and everything committed so far stays committed.
    pub fn import_from_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let transaction = import::parse_line(&line, index + 1)?;
            self.add(transaction)?;
        }
        Ok(())
    }

    /// Writes the snapshot; if the write fails, the in-memory mutation is
    /// rolled back so memory and disk never drift apart.
    fn persist(&mut self, backup: Ledger) -> Result<()> {
        if let Err(err) = self.storage.save(&self.ledger) {
            self.ledger = backup;
            return Err(err);
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
