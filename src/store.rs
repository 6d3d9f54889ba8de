use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::account::{Account, AccountNumber};
use crate::error::TxError;

/// All registered accounts, keyed by account number. Accounts are created
/// once and never deleted.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<AccountNumber, Account>,
}

impl AccountStore {
    /// Registering an already-used account number is refused; existing
    /// state is never overwritten.
    pub fn register(&mut self, account: Account) -> Result<(), TxError> {
        match self.accounts.entry(account.number().to_owned()) {
            Entry::Occupied(entry) => Err(TxError::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    pub fn find(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn find_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    /// Zeroes both daily counters on every account. Commands are strictly
    /// sequential, so the sweep is one logical step to every observer.
    pub fn reset_all_daily(&mut self) {
        for account in self.accounts.values_mut() {
            account.reset_daily();
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
