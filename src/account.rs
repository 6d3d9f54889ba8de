use crate::command::Tier;

pub type AccountNumber = String;

/// Balance at or above which an account is treated as VIP regardless of
/// its stored tier.
pub const VIP_BALANCE_FLOOR: u64 = 5_000_000;

/// Consecutive PIN failures that lock an account.
pub const MAX_PIN_FAILURES: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Active,
    Locked,
}

/// Balance/counter mutation applied to one account by a successful
/// transaction. Validation happens up front; applying an event never fails.
#[derive(Debug, PartialEq, Eq)]
pub enum AccountEvent {
    Deposited { amount: u64 },
    Withdrawn { amount: u64, fee: u64 },
    TransferredOut { amount: u64, fee: u64 },
    TransferredIn { amount: u64 },
}

#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    pin: String,
    balance: u64,
    tier: Tier,
    lock: LockState,
    failed_attempts: u8,
    daily_withdrawn: u64,
    daily_transferred: u64,
}

impl Account {
    pub fn new(number: AccountNumber, holder: String, pin: String, balance: u64, tier: Tier) -> Self {
        Self {
            number,
            holder,
            pin,
            balance,
            tier,
            lock: LockState::Active,
            failed_attempts: 0,
            daily_withdrawn: 0,
            daily_transferred: 0,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn daily_withdrawn(&self) -> u64 {
        self.daily_withdrawn
    }

    pub fn daily_transferred(&self) -> u64 {
        self.daily_transferred
    }

    pub fn failed_attempts(&self) -> u8 {
        self.failed_attempts
    }

    /// Effective VIP status, derived fresh at every use: the stored tier
    /// or a balance at the VIP floor. Never persisted.
    pub fn is_vip(&self) -> bool {
        self.tier == Tier::Vip || self.balance >= VIP_BALANCE_FLOOR
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Counts one PIN mismatch; the third consecutive failure locks the
    /// account. Returns the state after the failure was recorded.
    pub fn record_pin_failure(&mut self) -> LockState {
        if self.failed_attempts < MAX_PIN_FAILURES {
            self.failed_attempts += 1;
        }
        if self.failed_attempts >= MAX_PIN_FAILURES {
            self.lock = LockState::Locked;
        }
        self.lock
    }

    /// A successful PIN match resets the consecutive-failure counter.
    pub fn clear_pin_failures(&mut self) {
        self.failed_attempts = 0;
    }

    /// Administrative unlock: reactivates the account and zeroes the
    /// failure counter. A no-op on an already-active account.
    pub fn unlock(&mut self) {
        self.lock = LockState::Active;
        self.failed_attempts = 0;
    }

    pub fn reset_daily(&mut self) {
        self.daily_withdrawn = 0;
        self.daily_transferred = 0;
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        match *event {
            AccountEvent::Deposited { amount } => {
                self.balance += amount;
            }
            AccountEvent::Withdrawn { amount, fee } => {
                self.balance -= amount + fee;
                self.daily_withdrawn += amount;
            }
            AccountEvent::TransferredOut { amount, fee } => {
                self.balance -= amount + fee;
                self.daily_transferred += amount;
            }
            AccountEvent::TransferredIn { amount } => {
                self.balance += amount;
            }
        }
    }
}
