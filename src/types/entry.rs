//! Ledger entry types
//!
//! The ledger is an append-only record of signed monetary movements tied to
//! an account and a timestamp. Entries are never updated or deleted;
//! corrections are modeled as new entries.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ledger entry identifier
pub type EntryId = u64;

/// Kind tag for a ledger entry
///
/// Informational only: the sign of [`LedgerEntry::amount`] is authoritative
/// for balance math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Funds added to the account; the amount is stored positive
    Deposit,

    /// Funds removed from the account; the amount is stored negative
    Withdrawal,
}

/// A single signed monetary movement on an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Storage-assigned identity
    pub id: EntryId,

    /// Owning account
    pub account_id: AccountId,

    /// Kind tag (informational; see [`EntryKind`])
    pub kind: EntryKind,

    /// Signed amount at 4 fractional digits
    ///
    /// Deposits are positive, withdrawals negative. Serialized as
    /// fixed-point decimal text.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,

    /// Effective time of the movement (UTC)
    pub effective_at: DateTime<Utc>,
}
