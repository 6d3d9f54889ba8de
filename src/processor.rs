//! End-to-end processing of one command: authentication pipeline, fee
//! computation, state mutation and outcome construction. Commands run
//! strictly one at a time; a rejected transaction mutates nothing, with
//! the single documented exception of the PIN failure counter.

use crate::account::{Account, AccountEvent, AccountNumber};
use crate::clock::Clock;
use crate::command::{BankKind, Tier};
use crate::error::TxError;
use crate::fees::{self, FeeOp};
use crate::store::AccountStore;
use crate::validator::{self, PinCheck};

/// Successful transaction record. Timestamp-free: the rendering layer
/// stamps output from [`Atm::clock`] itself.
#[derive(Debug, PartialEq, Eq)]
pub enum Receipt {
    Deposit {
        account: AccountNumber,
        amount: u64,
        balance: u64,
        fee: u64,
    },
    Withdraw {
        account: AccountNumber,
        amount: u64,
        balance: u64,
        fee: u64,
    },
    Transfer {
        from: AccountNumber,
        to: AccountNumber,
        amount: u64,
        fee: u64,
    },
    Balance {
        account: AccountNumber,
        balance: u64,
    },
    Unlock {
        account: AccountNumber,
    },
}

/// Result of one transaction-class command. `LockTriggered` is emitted
/// exactly once per lock episode, at the third consecutive PIN failure;
/// later attempts report `TxError::AccountLocked` instead.
#[derive(Debug, PartialEq, Eq)]
pub enum TxOutcome {
    Success(Receipt),
    Rejected(TxError),
    LockTriggered { account: AccountNumber },
}

/// Internal short-circuit for the validation pipeline, so `?` carries
/// both plain rejections and the lock-triggered event.
enum Reject {
    Error(TxError),
    LockTriggered(AccountNumber),
}

impl From<TxError> for Reject {
    fn from(err: TxError) -> Self {
        Reject::Error(err)
    }
}

impl Reject {
    fn into_outcome(self) -> TxOutcome {
        match self {
            Reject::Error(err) => TxOutcome::Rejected(err),
            Reject::LockTriggered(account) => TxOutcome::LockTriggered { account },
        }
    }
}

/// The whole simulated backend: one clock, one account store, no other
/// state. Owned exclusively by the single processing loop.
#[derive(Debug, Default)]
pub struct Atm {
    clock: Clock,
    store: AccountStore,
}

impl Atm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn set_time(&mut self, minute: u16, weekday: u8) {
        self.clock.set(minute, weekday);
    }

    pub fn register(
        &mut self,
        number: AccountNumber,
        holder: String,
        pin: String,
        balance: u64,
        tier: Tier,
    ) -> Result<(), TxError> {
        self.store
            .register(Account::new(number, holder, pin, balance, tier))
    }

    pub fn deposit(&mut self, number: &str, pin: &str, amount: u64) -> TxOutcome {
        match self.try_deposit(number, pin, amount) {
            Ok(receipt) => TxOutcome::Success(receipt),
            Err(reject) => reject.into_outcome(),
        }
    }

    pub fn withdraw(&mut self, number: &str, pin: &str, amount: u64) -> TxOutcome {
        match self.try_withdraw(number, pin, amount) {
            Ok(receipt) => TxOutcome::Success(receipt),
            Err(reject) => reject.into_outcome(),
        }
    }

    pub fn transfer(
        &mut self,
        from: &str,
        pin: &str,
        to: &str,
        amount: u64,
        bank: BankKind,
    ) -> TxOutcome {
        match self.try_transfer(from, pin, to, amount, bank) {
            Ok(receipt) => TxOutcome::Success(receipt),
            Err(reject) => reject.into_outcome(),
        }
    }

    pub fn balance(&mut self, number: &str, pin: &str) -> TxOutcome {
        match self.try_balance(number, pin) {
            Ok(receipt) => TxOutcome::Success(receipt),
            Err(reject) => reject.into_outcome(),
        }
    }

    /// Administrative: no PIN, no maintenance check. Idempotent.
    pub fn unlock(&mut self, number: &str) -> TxOutcome {
        match self.store.find_mut(number) {
            Some(account) => {
                account.unlock();
                TxOutcome::Success(Receipt::Unlock { account: number.to_owned() })
            }
            None => TxOutcome::Rejected(TxError::AccountNotFound(number.to_owned())),
        }
    }

    /// Administrative: zeroes every account's daily counters. Always
    /// succeeds and produces no outcome record.
    pub fn reset_daily(&mut self) {
        self.store.reset_all_daily();
    }

    /// Shared head of the pipeline: maintenance window, account lookup,
    /// lock state, PIN. The PIN counter mutation happens here even when
    /// the transaction is ultimately rejected.
    fn authenticate(&mut self, number: &str, pin: &str) -> Result<(), Reject> {
        if self.clock.is_maintenance_window() {
            return Err(TxError::MaintenanceActive.into());
        }
        let Some(account) = self.store.find_mut(number) else {
            return Err(TxError::AccountNotFound(number.to_owned()).into());
        };
        if account.is_locked() {
            return Err(TxError::AccountLocked(number.to_owned()).into());
        }
        match validator::verify_pin(account, pin) {
            PinCheck::Accepted => {
                account.clear_pin_failures();
                Ok(())
            }
            PinCheck::Rejected => {
                account.record_pin_failure();
                Err(TxError::InvalidPin.into())
            }
            PinCheck::LockTriggered => {
                account.record_pin_failure();
                Err(Reject::LockTriggered(number.to_owned()))
            }
        }
    }

    fn try_deposit(&mut self, number: &str, pin: &str, amount: u64) -> Result<Receipt, Reject> {
        self.authenticate(number, pin)?;
        validator::check_deposit(amount)?;
        let Some(account) = self.store.find_mut(number) else {
            return Err(TxError::AccountNotFound(number.to_owned()).into());
        };
        account.apply(&AccountEvent::Deposited { amount });
        Ok(Receipt::Deposit {
            account: number.to_owned(),
            amount,
            balance: account.balance(),
            fee: 0,
        })
    }

    fn try_withdraw(&mut self, number: &str, pin: &str, amount: u64) -> Result<Receipt, Reject> {
        self.authenticate(number, pin)?;
        let zone = self.clock.zone_class();
        let Some(account) = self.store.find_mut(number) else {
            return Err(TxError::AccountNotFound(number.to_owned()).into());
        };
        let fee = fees::fee(account.is_vip(), zone, FeeOp::Withdraw);
        validator::check_withdrawal(account, amount, fee)?;
        account.apply(&AccountEvent::Withdrawn { amount, fee });
        Ok(Receipt::Withdraw {
            account: number.to_owned(),
            amount,
            balance: account.balance(),
            fee,
        })
    }

    fn try_transfer(
        &mut self,
        from: &str,
        pin: &str,
        to: &str,
        amount: u64,
        bank: BankKind,
    ) -> Result<Receipt, Reject> {
        self.authenticate(from, pin)?;
        let clock = self.clock;
        let destination_exists = self.store.contains(to);
        let op = match bank {
            BankKind::Same => FeeOp::TransferSame,
            BankKind::Other => FeeOp::TransferOther,
        };
        let Some(source) = self.store.find_mut(from) else {
            return Err(TxError::AccountNotFound(from.to_owned()).into());
        };
        let fee = fees::fee(source.is_vip(), clock.zone_class(), op);
        validator::check_transfer(source, to, destination_exists, &clock, amount, fee)?;
        source.apply(&AccountEvent::TransferredOut { amount, fee });
        let Some(destination) = self.store.find_mut(to) else {
            return Err(TxError::DestinationNotFound(to.to_owned()).into());
        };
        destination.apply(&AccountEvent::TransferredIn { amount });
        Ok(Receipt::Transfer {
            from: from.to_owned(),
            to: to.to_owned(),
            amount,
            fee,
        })
    }

    fn try_balance(&mut self, number: &str, pin: &str) -> Result<Receipt, Reject> {
        self.authenticate(number, pin)?;
        let Some(account) = self.store.find(number) else {
            return Err(TxError::AccountNotFound(number.to_owned()).into());
        };
        Ok(Receipt::Balance {
            account: number.to_owned(),
            balance: account.balance(),
        })
    }
}
