//! Account ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Account records and event types
//! - The account store contract
//! - Error types for ledger operations
//! - Ledger service applying deposits, withdrawals, and transfers

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::LedgerError;
pub use service::LedgerService;
pub use store::{AccountStore, StoreError};
pub use types::{Account, EventKind, EventOutcome, LedgerEvent};
