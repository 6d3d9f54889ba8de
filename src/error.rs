use thiserror::Error;

use crate::account::AccountNumber;

/// Reasons a transaction-class command is rejected. These are reported
/// back as values in the command's outcome, never propagated as control
/// flow across the core boundary.
///
/// The lock-triggered notification is deliberately not here: it is a
/// one-time event (`TxOutcome::LockTriggered`), while every later attempt
/// on the locked account reports `AccountLocked`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    #[error("System is under maintenance (23:30-00:30)")]
    MaintenanceActive,
    #[error("Account {0} not found")]
    AccountNotFound(AccountNumber),
    #[error("Account {0} is locked")]
    AccountLocked(AccountNumber),
    #[error("Invalid PIN code")]
    InvalidPin,
    #[error("Insufficient balance (available: {available}, required: {required})")]
    InsufficientBalance { available: u64, required: u64 },
    #[error("Daily withdrawal limit exceeded (limit: {limit}, attempted: {attempted})")]
    WithdrawalLimitExceeded { limit: u64, attempted: u64 },
    #[error("Daily transfer limit exceeded (limit: {limit}, attempted: {attempted})")]
    TransferLimitExceeded { limit: u64, attempted: u64 },
    #[error("Large amount transactions only available on weekdays 09:00-15:00")]
    LargeAmountWindowViolation,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Destination account {0} not found")]
    DestinationNotFound(AccountNumber),
    #[error("Account {0} already exists")]
    DuplicateAccount(AccountNumber),
}
