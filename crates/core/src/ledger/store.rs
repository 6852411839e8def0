//! Account store contract.
//!
//! The ledger reaches storage only through [`AccountStore`]. Implementations
//! hold no business rules; validation lives in
//! [`LedgerService`](super::LedgerService).

use ledgerly_shared::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Account;

/// Errors raised by an account store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The account to update does not exist.
    #[error("Account not found in store: {0}")]
    AccountNotFound(AccountId),
}

/// Keyed persistence surface for [`Account`] records.
///
/// No concurrency guarantees: callers sequence access.
#[cfg_attr(test, mockall::automock)]
pub trait AccountStore {
    /// Looks up an account. No side effects.
    fn get(&self, id: &AccountId) -> Option<Account>;

    /// Inserts an account, overwriting any existing record with the same id.
    fn create(&mut self, id: &AccountId, initial_balance: Decimal) -> Account;

    /// Sets the balance of an existing account and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AccountNotFound`] if no record exists; the store
    /// is left unchanged.
    fn update_balance(
        &mut self,
        id: &AccountId,
        new_balance: Decimal,
    ) -> Result<Account, StoreError>;

    /// Removes every account.
    fn reset(&mut self);

    /// Number of stored accounts.
    fn len(&self) -> usize;

    /// Returns true if the store holds no accounts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
