//! Types module
//!
//! Contains core data structures used throughout the engine.
//! This module organizes types into logical submodules:
//! - `account`: investment account owned by an external user
//! - `statement`: periodic balance checkpoints
//! - `entry`: signed ledger movements (deposits and withdrawals)
//! - `money`: fixed-point decimal parsing and formatting rules
//! - `error`: error types for the investment engine

pub mod account;
pub mod entry;
pub mod error;
pub mod money;
pub mod statement;

pub use account::{Account, AccountId};
pub use entry::{EntryId, EntryKind, LedgerEntry};
pub use error::InvestmentError;
pub use statement::{Statement, StatementId};
