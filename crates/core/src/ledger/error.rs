//! Ledger error types.
//!
//! Two failures are deliberately folded together at the HTTP boundary: an
//! unknown origin and an origin without enough funds both surface as
//! "not found". Everything else is a malformed request.

use ledgerly_shared::{AccountId, AppError};
use rust_decimal::Decimal;
use thiserror::Error;

use super::store::StoreError;
use super::types::EventKind;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    // ========== Account Errors ==========
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Origin balance is lower than the requested amount.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// The origin account.
        account: AccountId,
        /// Balance at the time of the request.
        balance: Decimal,
        /// Amount requested.
        requested: Decimal,
    },

    // ========== Validation Errors ==========
    /// Amount must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Amount was rounded to zero because it has more fractional digits
    /// than a decimal can hold.
    #[error("Amount is smaller than the supported precision of 28 decimal places")]
    AmountBelowPrecision,

    /// Origin and destination of a transfer are the same account.
    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(AccountId),

    /// Resulting balance does not fit in a decimal.
    #[error("Balance overflow on account {0}")]
    BalanceOverflow(AccountId),

    /// Event type string is not recognized.
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    /// Event is missing an account required by its kind.
    #[error("{kind} event requires '{field}'")]
    MissingField {
        /// The event kind.
        kind: EventKind,
        /// The missing field name.
        field: &'static str,
    },

    // ========== Storage Errors ==========
    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns true for failures reported to callers as "not found".
    ///
    /// Unknown origin and insufficient funds are indistinguishable from
    /// the outside.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::InsufficientFunds { .. }
        )
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) | LedgerError::InsufficientFunds { .. } => {
                Self::NotFound(err.to_string())
            }
            LedgerError::NonPositiveAmount(_)
            | LedgerError::AmountBelowPrecision
            | LedgerError::SameAccountTransfer(_)
            | LedgerError::BalanceOverflow(_)
            | LedgerError::UnknownEventType(_)
            | LedgerError::MissingField { .. } => Self::Validation(err.to_string()),
            LedgerError::Store(_) => Self::Internal(err.to_string()),
        }
    }
}
