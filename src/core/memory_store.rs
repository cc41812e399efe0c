//! In-memory storage backend
//!
//! This module provides [`MemoryStore`], the reference [`Store`]
//! implementation. Committed state lives behind a mutex; each unit of work
//! reads that state directly and stages its inserts, which are applied only
//! when the work closure returns `Ok`.
//!
//! # Isolation
//!
//! The committed-state lock is held for the full duration of a unit of
//! work, so units of work are serialized. Every read inside one unit of
//! work therefore observes a single consistent snapshot, and staged writes
//! are never visible to other callers before commit.

use crate::core::traits::{Store, StoreTx};
use crate::types::{
    Account, AccountId, EntryId, EntryKind, InvestmentError, LedgerEntry, Statement, StatementId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Mutex;

/// Committed store contents
#[derive(Debug, Default)]
struct Committed {
    /// Accounts by identity
    accounts: HashMap<AccountId, Account>,
    /// Owner identifier to account identity, enforcing one account per owner
    owners: HashMap<String, AccountId>,
    /// Statements grouped by owning account
    statements: HashMap<AccountId, Vec<Statement>>,
    /// Ledger entries grouped by owning account
    entries: HashMap<AccountId, Vec<LedgerEntry>>,
    next_account_id: AccountId,
    next_statement_id: StatementId,
    next_entry_id: EntryId,
}

impl Committed {
    /// Apply the inserts staged by a successful unit of work
    fn apply(&mut self, staged: Staged) {
        for account in staged.accounts {
            self.owners.insert(account.owner_id.clone(), account.id);
            self.accounts.insert(account.id, account);
        }
        for statement in staged.statements {
            self.statements
                .entry(statement.account_id)
                .or_default()
                .push(statement);
        }
        for entry in staged.entries {
            self.entries.entry(entry.account_id).or_default().push(entry);
        }
        self.next_account_id = staged.next_account_id;
        self.next_statement_id = staged.next_statement_id;
        self.next_entry_id = staged.next_entry_id;
    }
}

/// Inserts staged by one unit of work, plus the identity counters they
/// advanced
#[derive(Debug)]
struct Staged {
    accounts: Vec<Account>,
    statements: Vec<Statement>,
    entries: Vec<LedgerEntry>,
    next_account_id: AccountId,
    next_statement_id: StatementId,
    next_entry_id: EntryId,
}

/// One in-flight unit of work: committed state for reads, staged inserts
/// for writes
struct MemoryTx<'a> {
    committed: &'a Committed,
    staged: Staged,
}

impl MemoryTx<'_> {
    fn account_exists(&self, account_id: AccountId) -> bool {
        self.committed.accounts.contains_key(&account_id)
            || self.staged.accounts.iter().any(|a| a.id == account_id)
    }
}

impl StoreTx for MemoryTx<'_> {
    fn find_account_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Option<Account>, InvestmentError> {
        Ok(self
            .committed
            .owners
            .get(owner_id)
            .and_then(|id| self.committed.accounts.get(id))
            .cloned())
    }

    fn find_latest_statement(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Statement>, InvestmentError> {
        Ok(self
            .committed
            .statements
            .get(&account_id)
            .and_then(|statements| statements.iter().max_by_key(|s| s.recorded_at))
            .cloned())
    }

    fn find_entries_since(
        &self,
        account_id: AccountId,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<LedgerEntry>, InvestmentError> {
        let mut entries: Vec<LedgerEntry> = self
            .committed
            .entries
            .get(&account_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.effective_at >= cutoff)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by_key(|e| (e.effective_at, e.id));
        Ok(entries)
    }

    fn insert_account(&mut self, owner_id: &str) -> Result<Account, InvestmentError> {
        let taken = self.committed.owners.contains_key(owner_id)
            || self.staged.accounts.iter().any(|a| a.owner_id == owner_id);
        if taken {
            return Err(InvestmentError::duplicate_account(owner_id));
        }

        let account = Account {
            id: self.staged.next_account_id,
            owner_id: owner_id.to_string(),
        };
        self.staged.next_account_id += 1;
        self.staged.accounts.push(account.clone());
        Ok(account)
    }

    fn insert_statement(
        &mut self,
        account_id: AccountId,
        balance: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> Result<Statement, InvestmentError> {
        if !self.account_exists(account_id) {
            return Err(InvestmentError::storage(format!(
                "unknown account id {account_id}"
            )));
        }

        let statement = Statement {
            id: self.staged.next_statement_id,
            account_id,
            balance,
            recorded_at,
        };
        self.staged.next_statement_id += 1;
        self.staged.statements.push(statement.clone());
        Ok(statement)
    }

    fn insert_entry(
        &mut self,
        account_id: AccountId,
        kind: EntryKind,
        amount: Decimal,
        effective_at: DateTime<Utc>,
    ) -> Result<LedgerEntry, InvestmentError> {
        if !self.account_exists(account_id) {
            return Err(InvestmentError::storage(format!(
                "unknown account id {account_id}"
            )));
        }

        let entry = LedgerEntry {
            id: self.staged.next_entry_id,
            account_id,
            kind,
            amount,
            effective_at,
        };
        self.staged.next_entry_id += 1;
        self.staged.entries.push(entry.clone());
        Ok(entry)
    }
}

/// In-memory store with all-or-nothing units of work
///
/// Suitable as the reference backend for tests and embedded use. Identity
/// values are assigned from monotonic counters at staging time and only
/// become durable on commit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: Mutex<Committed>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn unit_of_work<T, F>(&self, work: F) -> Result<T, InvestmentError>
    where
        F: FnOnce(&mut dyn StoreTx) -> Result<T, InvestmentError>,
    {
        let mut committed = self
            .committed
            .lock()
            .map_err(|_| InvestmentError::storage("store lock poisoned"))?;

        let mut tx = MemoryTx {
            staged: Staged {
                accounts: Vec::new(),
                statements: Vec::new(),
                entries: Vec::new(),
                next_account_id: committed.next_account_id,
                next_statement_id: committed.next_statement_id,
                next_entry_id: committed.next_entry_id,
            },
            committed: &*committed,
        };

        let result = work(&mut tx)?;

        let MemoryTx { staged, .. } = tx;
        committed.apply(staged);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn committed_writes_are_visible_to_later_units_of_work() {
        let store = MemoryStore::new();

        let account = store
            .unit_of_work(|tx| {
                let account = tx.insert_account("user-1")?;
                tx.insert_statement(account.id, dec!(0.0000), date(1))?;
                Ok(account)
            })
            .unwrap();

        let found = store
            .unit_of_work(|tx| tx.find_account_by_owner("user-1"))
            .unwrap();
        assert_eq!(found, Some(account.clone()));

        let statement = store
            .unit_of_work(|tx| tx.find_latest_statement(account.id))
            .unwrap()
            .unwrap();
        assert_eq!(statement.balance, dec!(0.0000));
        assert_eq!(statement.recorded_at, date(1));
    }

    #[test]
    fn failed_unit_of_work_commits_nothing() {
        let store = MemoryStore::new();

        let result: Result<(), _> = store.unit_of_work(|tx| {
            tx.insert_account("user-1")?;
            Err(InvestmentError::storage("forced failure"))
        });
        assert!(result.is_err());

        let found = store
            .unit_of_work(|tx| tx.find_account_by_owner("user-1"))
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn duplicate_owner_rejected_across_units_of_work() {
        let store = MemoryStore::new();
        store.unit_of_work(|tx| tx.insert_account("user-1")).unwrap();

        let result = store.unit_of_work(|tx| tx.insert_account("user-1"));
        assert_eq!(
            result,
            Err(InvestmentError::duplicate_account("user-1"))
        );
    }

    #[test]
    fn duplicate_owner_rejected_within_one_unit_of_work() {
        let store = MemoryStore::new();

        let result = store.unit_of_work(|tx| {
            tx.insert_account("user-1")?;
            tx.insert_account("user-1")
        });
        assert_eq!(
            result,
            Err(InvestmentError::duplicate_account("user-1"))
        );
    }

    #[test]
    fn entries_filtered_inclusively_and_sorted_ascending() {
        let store = MemoryStore::new();

        let account = store
            .unit_of_work(|tx| {
                let account = tx.insert_account("user-1")?;
                // Inserted deliberately out of chronological order.
                tx.insert_entry(account.id, EntryKind::Deposit, dec!(3.0000), date(15))?;
                tx.insert_entry(account.id, EntryKind::Deposit, dec!(1.0000), date(5))?;
                tx.insert_entry(account.id, EntryKind::Deposit, dec!(2.0000), date(10))?;
                tx.insert_entry(account.id, EntryKind::Deposit, dec!(0.5000), date(2))?;
                Ok(account)
            })
            .unwrap();

        let entries = store
            .unit_of_work(|tx| tx.find_entries_since(account.id, date(5)))
            .unwrap();

        let amounts: Vec<Decimal> = entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![dec!(1.0000), dec!(2.0000), dec!(3.0000)]);
    }

    #[test]
    fn latest_statement_wins_by_timestamp() {
        let store = MemoryStore::new();

        let account = store
            .unit_of_work(|tx| {
                let account = tx.insert_account("user-1")?;
                tx.insert_statement(account.id, dec!(0.0000), date(1))?;
                tx.insert_statement(account.id, dec!(500.0000), date(20))?;
                tx.insert_statement(account.id, dec!(250.0000), date(10))?;
                Ok(account)
            })
            .unwrap();

        let latest = store
            .unit_of_work(|tx| tx.find_latest_statement(account.id))
            .unwrap()
            .unwrap();
        assert_eq!(latest.balance, dec!(500.0000));
    }

    #[test]
    fn inserts_for_unknown_account_fail() {
        let store = MemoryStore::new();

        let result = store.unit_of_work(|tx| {
            tx.insert_entry(99, EntryKind::Deposit, dec!(1.0000), date(1))
        });
        assert!(matches!(result, Err(InvestmentError::Storage { .. })));
    }
}
