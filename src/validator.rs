//! Pure transaction rules. Every function here is a verdict on immutable
//! state; the one rule that also demands a mutation (PIN failure counting)
//! expresses it as a [`PinCheck`] verdict the orchestrator applies, so no
//! rule silently touches state on its own.
//!
//! Rules are evaluated in a fixed order and the first violation wins, even
//! when several would fail.

use crate::account::{Account, MAX_PIN_FAILURES};
use crate::clock::Clock;
use crate::error::TxError;

pub const DEPOSIT_MIN: u64 = 1;
pub const DEPOSIT_MAX: u64 = 1_000_000;

pub const WITHDRAW_MIN: u64 = 1_000;
pub const WITHDRAW_MAX: u64 = 200_000;
pub const WITHDRAW_UNIT: u64 = 1_000;
pub const WITHDRAW_DAILY_NORMAL: u64 = 500_000;
pub const WITHDRAW_DAILY_VIP: u64 = 1_000_000;

pub const TRANSFER_MAX: u64 = 1_000_000;
/// Transfers at or above this amount are only accepted inside the
/// large-amount window.
pub const LARGE_TRANSFER_FLOOR: u64 = 1_000_000;
pub const TRANSFER_DAILY_NORMAL: u64 = 1_000_000;
pub const TRANSFER_DAILY_VIP: u64 = 3_000_000;

/// Verdict of the PIN rule. The caller must apply the matching counter
/// mutation (clear on `Accepted`, count on `Rejected`, count-and-lock on
/// `LockTriggered`) whether or not the transaction goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCheck {
    Accepted,
    Rejected,
    LockTriggered,
}

pub fn verify_pin(account: &Account, pin: &str) -> PinCheck {
    if account.pin_matches(pin) {
        PinCheck::Accepted
    } else if account.failed_attempts() + 1 >= MAX_PIN_FAILURES {
        PinCheck::LockTriggered
    } else {
        PinCheck::Rejected
    }
}

pub fn check_deposit(amount: u64) -> Result<(), TxError> {
    if !(DEPOSIT_MIN..=DEPOSIT_MAX).contains(&amount) {
        return Err(TxError::InvalidAmount);
    }
    Ok(())
}

/// Withdrawal rules, in order: amount shape, daily cap, funds. The fee is
/// computed by the caller first because principal and fee are debited
/// together, so sufficiency is judged against `amount + fee`.
pub fn check_withdrawal(account: &Account, amount: u64, fee: u64) -> Result<(), TxError> {
    if !(WITHDRAW_MIN..=WITHDRAW_MAX).contains(&amount) || amount % WITHDRAW_UNIT != 0 {
        return Err(TxError::InvalidAmount);
    }
    let limit = if account.is_vip() {
        WITHDRAW_DAILY_VIP
    } else {
        WITHDRAW_DAILY_NORMAL
    };
    if account.daily_withdrawn() + amount > limit {
        return Err(TxError::WithdrawalLimitExceeded { limit, attempted: amount });
    }
    let required = amount + fee;
    if account.balance() < required {
        return Err(TxError::InsufficientBalance {
            available: account.balance(),
            required,
        });
    }
    Ok(())
}

/// Transfer rules, in order: non-zero amount, destination existence,
/// large-amount window, single-transfer cap, daily cap, funds. The window
/// rule runs before the cap so an oversized off-window transfer reports
/// the window violation.
pub fn check_transfer(
    account: &Account,
    to: &str,
    destination_exists: bool,
    clock: &Clock,
    amount: u64,
    fee: u64,
) -> Result<(), TxError> {
    if amount < 1 {
        return Err(TxError::InvalidAmount);
    }
    if !destination_exists {
        return Err(TxError::DestinationNotFound(to.to_owned()));
    }
    if amount >= LARGE_TRANSFER_FLOOR && !clock.is_large_amount_window() {
        return Err(TxError::LargeAmountWindowViolation);
    }
    if amount > TRANSFER_MAX {
        return Err(TxError::InvalidAmount);
    }
    let limit = if account.is_vip() {
        TRANSFER_DAILY_VIP
    } else {
        TRANSFER_DAILY_NORMAL
    };
    if account.daily_transferred() + amount > limit {
        return Err(TxError::TransferLimitExceeded { limit, attempted: amount });
    }
    let required = amount + fee;
    if account.balance() < required {
        return Err(TxError::InsufficientBalance {
            available: account.balance(),
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountEvent;
    use crate::command::Tier;

    fn account(balance: u64, tier: Tier) -> Account {
        Account::new(
            "1000001".to_owned(),
            "Tanaka".to_owned(),
            "1234".to_owned(),
            balance,
            tier,
        )
    }

    fn weekday_daytime() -> Clock {
        let mut clock = Clock::default();
        clock.set(10 * 60, 1);
        clock
    }

    fn sunday_noon() -> Clock {
        let mut clock = Clock::default();
        clock.set(12 * 60, 6);
        clock
    }

    #[test]
    fn pin_verdicts() {
        let mut acc = account(1000, Tier::Normal);
        assert_eq!(verify_pin(&acc, "1234"), PinCheck::Accepted);
        assert_eq!(verify_pin(&acc, "9999"), PinCheck::Rejected);
        acc.record_pin_failure();
        assert_eq!(verify_pin(&acc, "9999"), PinCheck::Rejected);
        acc.record_pin_failure();
        // the next failure would be the third
        assert_eq!(verify_pin(&acc, "9999"), PinCheck::LockTriggered);
        assert_eq!(verify_pin(&acc, "1234"), PinCheck::Accepted);
    }

    #[test]
    fn deposit_bounds() {
        assert_eq!(check_deposit(0), Err(TxError::InvalidAmount));
        assert_eq!(check_deposit(1), Ok(()));
        assert_eq!(check_deposit(1_000_000), Ok(()));
        assert_eq!(check_deposit(1_000_001), Err(TxError::InvalidAmount));
    }

    #[test]
    fn withdrawal_amount_shape() {
        let acc = account(10_000_000, Tier::Normal);
        assert_eq!(check_withdrawal(&acc, 999, 0), Err(TxError::InvalidAmount));
        assert_eq!(check_withdrawal(&acc, 1_000, 0), Ok(()));
        assert_eq!(check_withdrawal(&acc, 1_500, 0), Err(TxError::InvalidAmount));
        assert_eq!(check_withdrawal(&acc, 200_000, 0), Ok(()));
        // over the single cap fails regardless of funds
        assert_eq!(check_withdrawal(&acc, 200_001, 0), Err(TxError::InvalidAmount));
        assert_eq!(check_withdrawal(&acc, 201_000, 0), Err(TxError::InvalidAmount));
    }

    #[test]
    fn withdrawal_daily_cap_is_per_tier() {
        let mut acc = account(10_000_000, Tier::Normal);
        // the account is balance-derived VIP, so the VIP cap applies
        acc.apply(&AccountEvent::Withdrawn { amount: 900_000, fee: 0 });
        assert_eq!(check_withdrawal(&acc, 100_000, 0), Ok(()));
        assert_eq!(
            check_withdrawal(&acc, 101_000, 0),
            Err(TxError::WithdrawalLimitExceeded { limit: WITHDRAW_DAILY_VIP, attempted: 101_000 })
        );

        let mut acc = account(2_000_000, Tier::Normal);
        acc.apply(&AccountEvent::Withdrawn { amount: 400_000, fee: 0 });
        assert_eq!(
            check_withdrawal(&acc, 101_000, 0),
            Err(TxError::WithdrawalLimitExceeded { limit: WITHDRAW_DAILY_NORMAL, attempted: 101_000 })
        );
    }

    #[test]
    fn withdrawal_funds_include_fee() {
        let acc = account(10_000, Tier::Normal);
        assert_eq!(check_withdrawal(&acc, 10_000, 0), Ok(()));
        assert_eq!(
            check_withdrawal(&acc, 10_000, 110),
            Err(TxError::InsufficientBalance { available: 10_000, required: 10_110 })
        );
    }

    #[test]
    fn transfer_rule_order() {
        let clock = sunday_noon();
        let acc = account(10_000_000, Tier::Vip);
        // zero amount loses before anything else
        assert_eq!(
            check_transfer(&acc, "2000002", false, &clock, 0, 0),
            Err(TxError::InvalidAmount)
        );
        // destination check precedes the window check
        assert_eq!(
            check_transfer(&acc, "2000002", false, &clock, 1_500_000, 0),
            Err(TxError::DestinationNotFound("2000002".to_owned()))
        );
        // off-window large transfer reports the window, not the cap,
        // regardless of tier or balance
        assert_eq!(
            check_transfer(&acc, "2000002", true, &clock, 1_500_000, 0),
            Err(TxError::LargeAmountWindowViolation)
        );
        // inside the window the single cap still holds
        assert_eq!(
            check_transfer(&acc, "2000002", true, &weekday_daytime(), 1_500_000, 0),
            Err(TxError::InvalidAmount)
        );
    }

    #[test]
    fn transfer_of_exactly_one_million_needs_the_window() {
        let acc = account(10_000_000, Tier::Vip);
        assert_eq!(
            check_transfer(&acc, "2000002", true, &weekday_daytime(), 1_000_000, 330),
            Ok(())
        );
        assert_eq!(
            check_transfer(&acc, "2000002", true, &sunday_noon(), 1_000_000, 330),
            Err(TxError::LargeAmountWindowViolation)
        );
    }

    #[test]
    fn transfer_daily_cap_is_per_tier() {
        let mut acc = account(2_000_000, Tier::Normal);
        acc.apply(&AccountEvent::TransferredOut { amount: 900_000, fee: 0 });
        assert_eq!(
            check_transfer(&acc, "2000002", true, &weekday_daytime(), 200_000, 0),
            Err(TxError::TransferLimitExceeded { limit: TRANSFER_DAILY_NORMAL, attempted: 200_000 })
        );
        assert_eq!(
            check_transfer(&acc, "2000002", true, &weekday_daytime(), 100_000, 0),
            Ok(())
        );
    }

    #[test]
    fn transfer_funds_include_fee() {
        let acc = account(10_000, Tier::Normal);
        assert_eq!(
            check_transfer(&acc, "2000002", true, &weekday_daytime(), 10_000, 440),
            Err(TxError::InsufficientBalance { available: 10_000, required: 10_440 })
        );
    }
}
