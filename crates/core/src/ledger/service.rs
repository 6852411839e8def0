//! Ledger service applying events to an account store.
//!
//! Every operation validates completely before its first write, so an event
//! is either fully applied or leaves the store untouched.

use ledgerly_shared::AccountId;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::store::AccountStore;
use super::types::{Account, EventOutcome, LedgerEvent};

/// Ledger engine over an [`AccountStore`].
///
/// The service owns its store. Sharing it between requests is the caller's
/// job, and so is serializing access: each method is one read-validate-write
/// unit and must not interleave with another on the same store.
#[derive(Debug, Default)]
pub struct LedgerService<S> {
    store: S,
}

impl<S: AccountStore> LedgerService<S> {
    /// Creates a ledger over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Clears every account.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Returns the balance of an account, or `None` if it does not exist.
    #[must_use]
    pub fn balance(&self, id: &AccountId) -> Option<Decimal> {
        self.store.get(id).map(|account| account.balance)
    }

    /// Applies an event, dispatching on its kind.
    pub fn apply(&mut self, event: LedgerEvent) -> Result<EventOutcome, LedgerError> {
        match event {
            LedgerEvent::Deposit {
                destination,
                amount,
            } => self.deposit(&destination, amount),
            LedgerEvent::Withdraw { origin, amount } => self.withdraw(&origin, amount),
            LedgerEvent::Transfer {
                origin,
                destination,
                amount,
            } => self.transfer(&origin, &destination, amount),
        }
    }

    /// Credits `destination`, creating it with `amount` if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails only on a non-positive amount or a balance overflow.
    pub fn deposit(
        &mut self,
        destination: &AccountId,
        amount: Decimal,
    ) -> Result<EventOutcome, LedgerError> {
        validate_amount(amount)?;

        let credited = match self.store.get(destination) {
            None => self.store.create(destination, amount),
            Some(existing) => {
                let balance = credit(&existing, amount)?;
                self.store.update_balance(destination, balance)?
            }
        };

        Ok(EventOutcome::Deposited {
            destination: credited,
        })
    }

    /// Debits `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] or
    /// [`LedgerError::InsufficientFunds`] without touching the store.
    pub fn withdraw(
        &mut self,
        origin: &AccountId,
        amount: Decimal,
    ) -> Result<EventOutcome, LedgerError> {
        validate_amount(amount)?;

        let account = self.funded_origin(origin, amount)?;
        let debited = self
            .store
            .update_balance(origin, account.balance - amount)?;

        Ok(EventOutcome::Withdrawn { origin: debited })
    }

    /// Moves `amount` from `origin` to `destination`.
    ///
    /// A missing destination is opened with a zero balance, but only after
    /// the origin has been checked.
    ///
    /// # Errors
    ///
    /// Same failures as [`withdraw`](Self::withdraw), plus
    /// [`LedgerError::SameAccountTransfer`] when both ids are equal.
    pub fn transfer(
        &mut self,
        origin: &AccountId,
        destination: &AccountId,
        amount: Decimal,
    ) -> Result<EventOutcome, LedgerError> {
        validate_amount(amount)?;
        if origin == destination {
            return Err(LedgerError::SameAccountTransfer(origin.clone()));
        }

        let source = self.funded_origin(origin, amount)?;
        let target = self.store.get(destination);
        let credited = match &target {
            Some(existing) => credit(existing, amount)?,
            None => amount,
        };

        // All checks passed; writes start here
        if target.is_none() {
            self.store.create(destination, Decimal::ZERO);
        }
        let debited = self.store.update_balance(origin, source.balance - amount)?;
        let credited = self.store.update_balance(destination, credited)?;

        Ok(EventOutcome::Transferred {
            origin: debited,
            destination: credited,
        })
    }

    fn funded_origin(&self, origin: &AccountId, amount: Decimal) -> Result<Account, LedgerError> {
        let account = self
            .store
            .get(origin)
            .ok_or_else(|| LedgerError::AccountNotFound(origin.clone()))?;

        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: account.id,
                balance: account.balance,
                requested: amount,
            });
        }

        Ok(account)
    }
}

/// Largest scale a `Decimal` keeps; longer fractions are rounded on parse.
const MAX_SCALE: u32 = 28;

fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount.is_zero() && amount.scale() == MAX_SCALE {
        return Err(LedgerError::AmountBelowPrecision);
    }
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(())
}

fn credit(account: &Account, amount: Decimal) -> Result<Decimal, LedgerError> {
    account
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::BalanceOverflow(account.id.clone()))
}
