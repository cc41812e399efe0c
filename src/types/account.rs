//! Account types for the investment engine
//!
//! An account binds a storage-assigned identity to an external owner
//! identifier. Statements and ledger entries belong to an account and are
//! reached through store queries; the account itself stays a plain value
//! object with no embedded collections.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned by the storage backend; supports up to 4,294,967,295 accounts.
pub type AccountId = u32;

/// An investment account belonging to one external owner
///
/// There is exactly one account per owner identifier. Accounts are immutable
/// once created; the mutable history (balances, movements) lives in the
/// statements and ledger entries that reference them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Storage-assigned identity
    pub id: AccountId,

    /// External owner identifier (opaque, unique per user)
    pub owner_id: String,
}
