use crate::command::{BankKind, Command, Tier};

/// Parses one whitespace-delimited command line. Unknown commands and
/// malformed arguments yield `None`; the caller decides whether to log.
pub fn parse_line(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match parts.next()? {
        "SET_TIME" => Command::SetTime {
            minute: parse_clock_time(parts.next()?)?,
            weekday: parts.next()?.parse().ok().filter(|d| *d < 7)?,
        },
        "SETUP_ACCOUNT" => Command::Register {
            number: parts.next()?.to_owned(),
            holder: parts.next()?.to_owned(),
            pin: parts.next()?.to_owned(),
            balance: parts.next()?.parse().ok()?,
            tier: parse_tier(parts.next()?)?,
        },
        "DEPOSIT" => Command::Deposit {
            number: parts.next()?.to_owned(),
            pin: parts.next()?.to_owned(),
            amount: parts.next()?.parse().ok()?,
        },
        "WITHDRAW" => Command::Withdraw {
            number: parts.next()?.to_owned(),
            pin: parts.next()?.to_owned(),
            amount: parts.next()?.parse().ok()?,
        },
        "TRANSFER" => Command::Transfer {
            from: parts.next()?.to_owned(),
            pin: parts.next()?.to_owned(),
            to: parts.next()?.to_owned(),
            amount: parts.next()?.parse().ok()?,
            bank: parse_bank(parts.next()?)?,
        },
        "BALANCE" => Command::Balance {
            number: parts.next()?.to_owned(),
            pin: parts.next()?.to_owned(),
        },
        "UNLOCK" => Command::Unlock { number: parts.next()?.to_owned() },
        "RESET_DAILY" => Command::ResetDaily,
        _ => return None,
    };
    // trailing garbage invalidates the line
    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

/// `HH:MM` -> minute of day.
fn parse_clock_time(text: &str) -> Option<u16> {
    let (hours, minutes) = text.split_once(':')?;
    let hours: u16 = hours.parse().ok().filter(|h| *h < 24)?;
    let minutes: u16 = minutes.parse().ok().filter(|m| *m < 60)?;
    Some(hours * 60 + minutes)
}

fn parse_tier(text: &str) -> Option<Tier> {
    match text {
        "NORMAL" => Some(Tier::Normal),
        "VIP" => Some(Tier::Vip),
        _ => None,
    }
}

fn parse_bank(text: &str) -> Option<BankKind> {
    match text {
        "SAME" => Some(BankKind::Same),
        "OTHER" => Some(BankKind::Other),
        _ => None,
    }
}
