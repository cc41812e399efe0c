//! Core business logic module
//!
//! This module contains the core components of the investment engine:
//! - `traits` - storage abstraction consumed by the engine
//! - `memory_store` - in-memory reference backend with atomic units of work
//! - `accrual` - balance-history reconstruction and daily interest math
//! - `engine` - public operation facade

pub mod accrual;
pub mod engine;
pub mod memory_store;
pub mod traits;

pub use engine::InvestmentEngine;
pub use memory_store::MemoryStore;
pub use traits::{Store, StoreTx};
