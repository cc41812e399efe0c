//! Statement snapshot types
//!
//! A statement is a periodic balance checkpoint for an account. The latest
//! statement by timestamp is the starting point for interest accrual; older
//! statements are kept as history.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statement identifier
pub type StatementId = u64;

/// Periodic balance checkpoint for an account
///
/// Statements are immutable once created. A newly created account carries
/// exactly one statement with a zero balance dated at account-creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Storage-assigned identity
    pub id: StatementId,

    /// Owning account
    pub account_id: AccountId,

    /// Balance at `recorded_at`, held at 4 fractional digits
    ///
    /// Serialized as fixed-point decimal text, never as a binary float.
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,

    /// Checkpoint time (UTC)
    pub recorded_at: DateTime<Utc>,
}
