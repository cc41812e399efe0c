//! Investment engine facade
//!
//! This module provides [`InvestmentEngine`], the public operation surface:
//! account creation and lookup, deposits, withdrawals, and interest accrual.
//! Every operation maps onto a single unit of work against the storage
//! backend, so each call is atomic and each compound read is consistent.

use crate::core::accrual;
use crate::core::traits::{Store, StoreTx};
use crate::types::money;
use crate::types::{Account, EntryKind, InvestmentError, LedgerEntry};
use chrono::{DateTime, Utc};

/// Public operation facade over a storage backend
///
/// The engine owns no state of its own; everything lives in the store, and
/// every operation re-reads what it needs. Interest accrual in particular is
/// a pure function of stored state: repeated calls without intervening
/// writes return the identical string.
pub struct InvestmentEngine<S: Store> {
    store: S,
}

impl<S: Store> InvestmentEngine<S> {
    /// Create an engine over the given storage backend
    pub fn new(store: S) -> Self {
        InvestmentEngine { store }
    }

    /// Borrow the underlying storage backend
    ///
    /// Useful for seeding or inspecting stored state directly, outside the
    /// engine's own operations.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an account for `owner_id` with its opening statement
    ///
    /// The account and a zero-balance statement dated `opened_at` are
    /// persisted as one atomic unit: both commit or neither does.
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError::DuplicateAccount`] if the owner already
    /// has an account.
    pub fn create_account(
        &self,
        owner_id: &str,
        opened_at: DateTime<Utc>,
    ) -> Result<Account, InvestmentError> {
        self.store.unit_of_work(|tx| {
            if tx.find_account_by_owner(owner_id)?.is_some() {
                return Err(InvestmentError::duplicate_account(owner_id));
            }

            let account = tx.insert_account(owner_id)?;
            tx.insert_statement(account.id, money::zero_balance(), opened_at)?;
            Ok(account)
        })
    }

    /// Look up the account for `owner_id`
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError::AccountNotFound`] if no account exists.
    pub fn get_account(&self, owner_id: &str) -> Result<Account, InvestmentError> {
        self.store.unit_of_work(|tx| require_account(tx, owner_id))
    }

    /// Record a deposit of `amount` (non-negative decimal text)
    ///
    /// The ledger entry is stored with a positive amount and kind
    /// [`EntryKind::Deposit`].
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError::InvalidAmount`] for malformed or negative
    /// amount text, or [`InvestmentError::AccountNotFound`] if the owner has
    /// no account.
    pub fn deposit(
        &self,
        owner_id: &str,
        amount: &str,
        effective_at: DateTime<Utc>,
    ) -> Result<LedgerEntry, InvestmentError> {
        let amount = money::parse_amount(amount)?;
        self.store.unit_of_work(|tx| {
            let account = require_account(tx, owner_id)?;
            tx.insert_entry(account.id, EntryKind::Deposit, amount, effective_at)
        })
    }

    /// Record a withdrawal of `amount` (the non-negative magnitude)
    ///
    /// The ledger entry is stored with the amount negated at storage scale
    /// and kind [`EntryKind::Withdrawal`]. No balance-sufficiency check is
    /// performed; overdraft is permitted.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`deposit`](Self::deposit).
    pub fn withdraw(
        &self,
        owner_id: &str,
        amount: &str,
        effective_at: DateTime<Utc>,
    ) -> Result<LedgerEntry, InvestmentError> {
        let amount = money::parse_amount(amount)?;
        self.store.unit_of_work(|tx| {
            let account = require_account(tx, owner_id)?;
            tx.insert_entry(account.id, EntryKind::Withdrawal, -amount, effective_at)
        })
    }

    /// Interest accrued over the latest statement's month, as 2-digit text
    ///
    /// Loads the statement with the maximum timestamp and every ledger entry
    /// dated on/after it (the boundary is inclusive) in one atomically
    /// consistent read, runs the accrual walk, and renders the result at
    /// display scale.
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError::AccountNotFound`] if the owner has no
    /// account, or [`InvestmentError::NoStatement`] if the account has no
    /// statements.
    pub fn interest_accrued(&self, owner_id: &str) -> Result<String, InvestmentError> {
        let accrued = self.store.unit_of_work(|tx| {
            let account = require_account(tx, owner_id)?;
            let statement = tx
                .find_latest_statement(account.id)?
                .ok_or_else(|| InvestmentError::no_statement(owner_id))?;
            let entries = tx.find_entries_since(account.id, statement.recorded_at)?;
            Ok(accrual::accrue(&statement, &entries))
        })?;

        Ok(money::format_interest(accrued))
    }
}

/// Resolve an account or fail with [`InvestmentError::AccountNotFound`]
fn require_account(tx: &dyn StoreTx, owner_id: &str) -> Result<Account, InvestmentError> {
    tx.find_account_by_owner(owner_id)?
        .ok_or_else(|| InvestmentError::account_not_found(owner_id))
}
