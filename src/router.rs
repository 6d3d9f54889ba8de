use crate::command::Command;
use crate::processor::{Atm, TxOutcome};

/// Routes one command to its processor entry point. The `match` is
/// exhaustive over the closed [`Command`] enum, so adding a command kind
/// without a handler fails to compile instead of falling through at
/// runtime.
///
/// Silent commands (SET_TIME, RESET_DAILY, successful registration) yield
/// `None`; a failed registration still surfaces its error.
pub fn dispatch(atm: &mut Atm, command: Command) -> Option<TxOutcome> {
    match command {
        Command::SetTime { minute, weekday } => {
            atm.set_time(minute, weekday);
            None
        }
        Command::Register { number, holder, pin, balance, tier } => {
            match atm.register(number, holder, pin, balance, tier) {
                Ok(()) => None,
                Err(err) => Some(TxOutcome::Rejected(err)),
            }
        }
        Command::Deposit { number, pin, amount } => Some(atm.deposit(&number, &pin, amount)),
        Command::Withdraw { number, pin, amount } => Some(atm.withdraw(&number, &pin, amount)),
        Command::Transfer { from, pin, to, amount, bank } => {
            Some(atm.transfer(&from, &pin, &to, amount, bank))
        }
        Command::Balance { number, pin } => Some(atm.balance(&number, &pin)),
        Command::Unlock { number } => Some(atm.unlock(&number)),
        Command::ResetDaily => {
            atm.reset_daily();
            None
        }
    }
}
