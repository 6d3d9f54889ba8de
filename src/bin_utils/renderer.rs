use crate::processor::{Receipt, TxOutcome};

/// Minute of day -> `HH:MM` for prefixing output lines. The core's
/// outcome records are timestamp-free; stamping is this layer's job.
pub fn format_timestamp(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

pub fn render_outcome(stamp: &str, outcome: &TxOutcome) -> String {
    match outcome {
        TxOutcome::Success(receipt) => match receipt {
            Receipt::Deposit { account, amount, balance, fee } => format!(
                "{stamp} DEPOSIT_SUCCESS: Account {account}, Amount {amount}, Balance {balance}, Fee {fee}"
            ),
            Receipt::Withdraw { account, amount, balance, fee } => format!(
                "{stamp} WITHDRAW_SUCCESS: Account {account}, Amount {amount}, Balance {balance}, Fee {fee}"
            ),
            Receipt::Transfer { from, to, amount, fee } => format!(
                "{stamp} TRANSFER_SUCCESS: From {from}, To {to}, Amount {amount}, Fee {fee}"
            ),
            Receipt::Balance { account, balance } => {
                format!("{stamp} BALANCE_SUCCESS: Account {account}, Balance {balance}")
            }
            Receipt::Unlock { account } => {
                format!("{stamp} UNLOCK_SUCCESS: Account {account} unlocked")
            }
        },
        TxOutcome::Rejected(err) => format!("{stamp} ERROR: {err}"),
        TxOutcome::LockTriggered { account } => format!(
            "{stamp} ACCOUNT_LOCKED: Account {account} has been locked due to multiple failed attempts"
        ),
    }
}
