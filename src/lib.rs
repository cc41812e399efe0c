//! Investment Engine Library
//!
//! # Overview
//!
//! This library tracks per-user investment accounts and computes
//! daily interest accrual between periodic balance statements. Given the
//! latest statement snapshot and the ledger entries recorded since it, the
//! engine reconstructs the day-by-day balance history inside the
//! statement's month and applies a fixed daily rate to each balance
//! segment, including the tail segment through month-end.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Statement, LedgerEntry), the
//!   fixed-point monetary rules, and the error taxonomy
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Public operation facade
//!   - [`core::accrual`] - Balance-history reconstruction and daily
//!     interest integration
//!   - [`core::traits`] - Storage abstraction (repository surface plus the
//!     unit-of-work primitive)
//!   - [`core::memory_store`] - In-memory reference backend
//!
//! # Operations
//!
//! The engine exposes five operations:
//!
//! - **create_account**: account plus zero-balance opening statement, as
//!   one atomic unit
//! - **get_account**: lookup by external owner identifier
//! - **deposit** / **withdraw**: append a signed ledger entry (deposits
//!   positive, withdrawals negated); overdraft is permitted
//! - **interest_accrued**: daily interest over the latest statement's
//!   month, rendered as 2-digit decimal text
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use investment_engine::{InvestmentEngine, MemoryStore};
//!
//! let engine = InvestmentEngine::new(MemoryStore::new());
//! let opened = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//!
//! engine.create_account("user-1", opened)?;
//! engine.deposit("user-1", "10000", opened)?;
//!
//! assert_eq!(engine.interest_accrued("user-1")?, "16.99");
//! # Ok::<(), investment_engine::InvestmentError>(())
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use core::{InvestmentEngine, MemoryStore, Store, StoreTx};
pub use types::{
    Account, AccountId, EntryId, EntryKind, InvestmentError, LedgerEntry, Statement, StatementId,
};
