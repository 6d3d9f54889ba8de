use crate::account::AccountNumber;

/// Stored account classification. The effective VIP status used by fees
/// and limits also considers the balance, see [`crate::account::Account::is_vip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Vip,
}

/// Whether a transfer stays within the bank or crosses to another one;
/// other-bank transfers carry a higher fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankKind {
    Same,
    Other,
}

/// One structured command, handed in by the parsing layer in input order.
/// A closed enum so the router's dispatch is checked for exhaustiveness at
/// compile time.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    SetTime {
        minute: u16,
        weekday: u8,
    },
    Register {
        number: AccountNumber,
        holder: String,
        pin: String,
        balance: u64,
        tier: Tier,
    },
    Deposit {
        number: AccountNumber,
        pin: String,
        amount: u64,
    },
    Withdraw {
        number: AccountNumber,
        pin: String,
        amount: u64,
    },
    Transfer {
        from: AccountNumber,
        pin: String,
        to: AccountNumber,
        amount: u64,
        bank: BankKind,
    },
    Balance {
        number: AccountNumber,
        pin: String,
    },
    Unlock {
        number: AccountNumber,
    },
    ResetDaily,
}
