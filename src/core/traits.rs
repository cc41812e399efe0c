//! Core storage traits
//!
//! The engine consumes persistent storage through two seams: [`StoreTx`],
//! the repository surface available inside one transaction, and [`Store`],
//! whose [`unit_of_work`](Store::unit_of_work) is the scoped-transaction
//! primitive. Implementations can be in-memory (the bundled
//! [`MemoryStore`](crate::core::memory_store::MemoryStore)) or backed by a
//! database; the engine relies only on the contracts below.

use crate::types::{Account, AccountId, EntryKind, InvestmentError, LedgerEntry, Statement};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Repository operations available inside one unit of work
///
/// Reads observe a single consistent snapshot of committed state for the
/// whole unit of work. Inserts are staged and become durable only when the
/// unit of work commits.
pub trait StoreTx {
    /// Look up an account by its external owner identifier
    fn find_account_by_owner(&self, owner_id: &str)
        -> Result<Option<Account>, InvestmentError>;

    /// Latest statement for an account, by `recorded_at`
    fn find_latest_statement(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Statement>, InvestmentError>;

    /// All ledger entries for an account dated on/after `cutoff`, in
    /// ascending timestamp order
    ///
    /// The boundary is inclusive: entries stamped exactly at `cutoff` are
    /// returned.
    fn find_entries_since(
        &self,
        account_id: AccountId,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<LedgerEntry>, InvestmentError>;

    /// Stage a new account, assigning its identity
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError::DuplicateAccount`] if the owner already
    /// has an account, whether committed or staged earlier in the same unit
    /// of work.
    fn insert_account(&mut self, owner_id: &str) -> Result<Account, InvestmentError>;

    /// Stage a new statement for an existing account
    fn insert_statement(
        &mut self,
        account_id: AccountId,
        balance: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> Result<Statement, InvestmentError>;

    /// Stage a new ledger entry for an existing account
    fn insert_entry(
        &mut self,
        account_id: AccountId,
        kind: EntryKind,
        amount: Decimal,
        effective_at: DateTime<Utc>,
    ) -> Result<LedgerEntry, InvestmentError>;
}

/// Storage backend providing atomic units of work
pub trait Store {
    /// Run `work` against one transaction
    ///
    /// All writes staged by `work` are committed if it returns `Ok` and
    /// discarded if it returns `Err`. Reads inside the closure see one
    /// consistent snapshot regardless of concurrent callers, so a compound
    /// read (latest statement plus its entries) never observes a
    /// partially-applied write.
    fn unit_of_work<T, F>(&self, work: F) -> Result<T, InvestmentError>
    where
        F: FnOnce(&mut dyn StoreTx) -> Result<T, InvestmentError>;
}
