use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{month::Month, transaction::Transaction};

/// Identifier assigned to each stored transaction. Allocated monotonically,
/// never reused, even across deletes and clear-all.
pub type TransactionId = u64;

/// The aggregate root: the month-indexed transaction store plus the
/// identifier counter. This struct is also the snapshot wire format — the
/// persisted file is exactly its JSON serialization, with the field names
/// (`lastId`, `transactions`) and uppercase month/category tokens of the
/// original data files.
///
/// `next_id` holds the next identifier to allocate (the original persisted
/// that value under `lastId`). Because identifiers are issued in ascending
/// order at add time and edits replace in place, ascending-id iteration of a
/// bucket is insertion order, so the inner `BTreeMap` round-trips bucket
/// ordering exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(rename = "lastId")]
    next_id: TransactionId,
    #[serde(rename = "transactions")]
    by_month: BTreeMap<Month, BTreeMap<TransactionId, Transaction>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files the transaction under `month` and returns its fresh identifier.
    pub fn insert(&mut self, month: Month, transaction: Transaction) -> TransactionId {
        let id = self.next_id;
        self.next_id += 1;
        self.by_month.entry(month).or_default().insert(id, transaction);
        id
    }

    /// Linear scan across all month buckets; fine at this data scale.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.by_month.values().find_map(|bucket| bucket.get(&id))
    }

    /// Replaces the transaction in place (same bucket, same position) and
    /// returns the previous value, or `None` when the id is unknown.
    pub fn replace(
        &mut self,
        id: TransactionId,
        transaction: Transaction,
    ) -> Option<Transaction> {
        self.by_month
            .values_mut()
            .find_map(|bucket| bucket.get_mut(&id))
            .map(|slot| std::mem::replace(slot, transaction))
    }

    /// Removes the identifier from whichever bucket holds it. The emptied
    /// bucket is kept, matching the persisted layout of the original system.
    pub fn remove(&mut self, id: TransactionId) -> Option<(Month, Transaction)> {
        for (month, bucket) in self.by_month.iter_mut() {
            if let Some(transaction) = bucket.remove(&id) {
                return Some((*month, transaction));
            }
        }
        None
    }

    /// Drops every transaction but keeps the identifier counter running, so
    /// ids issued after a clear continue the sequence.
    pub fn clear(&mut self) {
        self.by_month = BTreeMap::new();
    }

    /// Total spend filed under `month`; zero for an absent or empty bucket.
    pub fn month_spend(&self, month: Month) -> i64 {
        self.transactions_in(month).map(|(_, txn)| txn.sum).sum()
    }

    /// Transactions of one month in insertion order, with their ids.
    pub fn transactions_in(
        &self,
        month: Month,
    ) -> impl Iterator<Item = (TransactionId, &Transaction)> {
        self.by_month
            .get(&month)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(id, txn)| (*id, txn)))
    }

    /// Months in calendar order paired with their bucket sizes.
    pub fn months(&self) -> impl Iterator<Item = (Month, usize)> + '_ {
        self.by_month
            .iter()
            .map(|(month, bucket)| (*month, bucket.len()))
    }

    pub fn transaction_count(&self) -> usize {
        self.by_month.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count() == 0
    }

    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;

    fn txn(sum: i64) -> Transaction {
        Transaction::new(Category::Food, sum, "t")
    }

    #[test]
    fn ids_increase_and_survive_deletes() {
        let mut ledger = Ledger::new();
        let a = ledger.insert(Month::March, txn(1));
        let b = ledger.insert(Month::March, txn(2));
        assert!(b > a);
        assert!(ledger.remove(a).is_some());
        let c = ledger.insert(Month::April, txn(3));
        assert!(c > b, "deleted ids must never be reissued");
    }

    #[test]
    fn clear_keeps_the_counter() {
        let mut ledger = Ledger::new();
        ledger.insert(Month::May, txn(10));
        ledger.insert(Month::May, txn(20));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.insert(Month::May, txn(30)), 2);
    }

    #[test]
    fn every_id_lives_in_one_bucket() {
        let mut ledger = Ledger::new();
        let id = ledger.insert(Month::June, txn(5));
        let hits = ledger
            .months()
            .map(|(month, _)| month)
            .filter(|month| {
                ledger
                    .transactions_in(*month)
                    .any(|(candidate, _)| candidate == id)
            })
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn month_spend_sums_only_that_bucket() {
        let mut ledger = Ledger::new();
        ledger.insert(Month::January, txn(100));
        ledger.insert(Month::January, txn(250));
        ledger.insert(Month::February, txn(999));
        assert_eq!(ledger.month_spend(Month::January), 350);
        assert_eq!(ledger.month_spend(Month::February), 999);
        assert_eq!(ledger.month_spend(Month::December), 0);
    }

    #[test]
    fn replace_keeps_bucket_and_position() {
        let mut ledger = Ledger::new();
        let first = ledger.insert(Month::July, txn(1));
        let second = ledger.insert(Month::July, txn(2));
        let old = ledger
            .replace(first, Transaction::new(Category::Fun, 42, "edited"))
            .unwrap();
        assert_eq!(old.sum, 1);
        let order: Vec<_> = ledger.transactions_in(Month::July).map(|(id, _)| id).collect();
        assert_eq!(order, vec![first, second]);
        assert_eq!(ledger.get(first).unwrap().sum, 42);
    }

    #[test]
    fn replace_unknown_id_is_a_noop() {
        let mut ledger = Ledger::new();
        ledger.insert(Month::July, txn(1));
        let before = ledger.clone();
        assert!(ledger.replace(99, txn(5)).is_none());
        assert_eq!(ledger, before);
    }

    #[test]
    fn months_iterate_in_calendar_order() {
        let mut ledger = Ledger::new();
        ledger.insert(Month::December, txn(1));
        ledger.insert(Month::February, txn(2));
        ledger.insert(Month::August, txn(3));
        let months: Vec<_> = ledger.months().map(|(month, _)| month).collect();
        assert_eq!(months, vec![Month::February, Month::August, Month::December]);
    }
}
