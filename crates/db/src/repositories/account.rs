//! In-memory account repository.

use std::collections::HashMap;

use ledgerly_core::ledger::{Account, AccountStore, StoreError};
use ledgerly_shared::AccountId;
use rust_decimal::Decimal;
use tracing::trace;

/// Account store backed by a `HashMap`.
///
/// Holds no lock of its own; wrap it (or the service owning it) in one when
/// sharing across tasks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.get(id).cloned()
    }

    fn create(&mut self, id: &AccountId, initial_balance: Decimal) -> Account {
        let account = Account::new(id.clone(), initial_balance);
        if self.accounts.insert(id.clone(), account.clone()).is_some() {
            trace!(account_id = %id, "Overwrote existing account");
        }
        account
    }

    fn update_balance(
        &mut self,
        id: &AccountId,
        new_balance: Decimal,
    ) -> Result<Account, StoreError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| StoreError::AccountNotFound(id.clone()))?;
        account.balance = new_balance;
        Ok(account.clone())
    }

    fn reset(&mut self) {
        self.accounts.clear();
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn seeded() -> InMemoryAccountStore {
        let mut store = InMemoryAccountStore::new();
        store.create(&"100".into(), dec!(20));
        store.create(&"300".into(), dec!(0));
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryAccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(&"100".into()), None);
    }

    #[rstest]
    fn test_get_returns_created_account(seeded: InMemoryAccountStore) {
        assert_eq!(
            seeded.get(&"100".into()),
            Some(Account::new("100".into(), dec!(20)))
        );
        assert_eq!(seeded.len(), 2);
    }

    #[rstest]
    fn test_create_overwrites(mut seeded: InMemoryAccountStore) {
        let account = seeded.create(&"100".into(), dec!(1.5));

        assert_eq!(account.balance, dec!(1.5));
        assert_eq!(seeded.get(&"100".into()).map(|a| a.balance), Some(dec!(1.5)));
        assert_eq!(seeded.len(), 2);
    }

    #[rstest]
    fn test_update_balance_existing(mut seeded: InMemoryAccountStore) {
        let updated = seeded.update_balance(&"300".into(), dec!(15)).unwrap();

        assert_eq!(updated, Account::new("300".into(), dec!(15)));
        assert_eq!(seeded.get(&"300".into()), Some(updated));
    }

    #[rstest]
    fn test_update_balance_missing_leaves_store_unchanged(mut seeded: InMemoryAccountStore) {
        let before = seeded.clone();

        let result = seeded.update_balance(&"999".into(), dec!(1));

        assert_eq!(result, Err(StoreError::AccountNotFound("999".into())));
        assert_eq!(seeded.get(&"999".into()), None);
        assert_eq!(seeded.len(), before.len());
    }

    #[rstest]
    fn test_reset_is_idempotent(mut seeded: InMemoryAccountStore) {
        seeded.reset();
        assert!(seeded.is_empty());
        assert_eq!(seeded.get(&"100".into()), None);

        seeded.reset();
        assert!(seeded.is_empty());
    }
}
