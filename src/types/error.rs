//! Error types for the investment engine
//!
//! Every failure is terminal for the call in progress: the core performs no
//! retries, and a failed unit of work leaves no partial state behind.
//!
//! # Error Categories
//!
//! - **Account errors**: missing or duplicate accounts for an owner
//! - **Accrual errors**: accounts with no statement to accrue from
//! - **Amount errors**: malformed or out-of-bounds amount text
//! - **Storage errors**: failures in the storage collaborator, propagated
//!   unmodified

use thiserror::Error;

/// Main error type for the investment engine
///
/// Each variant carries the context needed to diagnose the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvestmentError {
    /// No account exists for the owner identifier
    #[error("No account found for owner '{owner_id}'")]
    AccountNotFound {
        /// Owner identifier that has no account
        owner_id: String,
    },

    /// The owner identifier already has an account
    ///
    /// One account per owner is an invariant; nothing else enforces it, so
    /// account creation checks explicitly.
    #[error("Owner '{owner_id}' already has an account")]
    DuplicateAccount {
        /// Owner identifier that is already taken
        owner_id: String,
    },

    /// Accrual was requested for an account with zero statements
    ///
    /// Cannot happen for accounts created through the engine, which writes
    /// the opening statement in the same unit of work, but externally seeded
    /// stores are defended against.
    #[error("Account for owner '{owner_id}' has no statements")]
    NoStatement {
        /// Owner identifier of the statement-less account
        owner_id: String,
    },

    /// Malformed, negative, or over-precision amount text
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The rejected amount text
        amount: String,
        /// Why it was rejected
        reason: String,
    },

    /// Failure in the storage collaborator, propagated unmodified
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },
}

// Helper functions for creating common errors

impl InvestmentError {
    /// Create an AccountNotFound error
    pub fn account_not_found(owner_id: &str) -> Self {
        InvestmentError::AccountNotFound {
            owner_id: owner_id.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(owner_id: &str) -> Self {
        InvestmentError::DuplicateAccount {
            owner_id: owner_id.to_string(),
        }
    }

    /// Create a NoStatement error
    pub fn no_statement(owner_id: &str) -> Self {
        InvestmentError::NoStatement {
            owner_id: owner_id.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, reason: &str) -> Self {
        InvestmentError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        InvestmentError::Storage {
            message: message.into(),
        }
    }
}
