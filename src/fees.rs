use crate::clock::ZoneClass;

/// Fee-bearing operation kinds. DEPOSIT and BALANCE are always free and
/// never reach the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeOp {
    Withdraw,
    TransferSame,
    TransferOther,
}

/// Fee in yen for one operation, keyed by effective VIP status, time zone
/// class and operation kind. The enums are closed, so the lookup is total:
/// there is no fallible "table miss" branch to mis-handle.
pub fn fee(vip: bool, zone: ZoneClass, op: FeeOp) -> u64 {
    use ZoneClass::*;
    match op {
        // withdrawals and same-bank transfers share a column
        FeeOp::Withdraw | FeeOp::TransferSame => match (zone, vip) {
            (WeekdayDaytime, false) => 110,
            (WeekdayDaytime, true) => 0,
            (WeekdayNight | Weekend, false) => 220,
            (WeekdayNight | Weekend, true) => 110,
        },
        FeeOp::TransferOther => match (zone, vip) {
            (WeekdayDaytime, false) => 440,
            (WeekdayDaytime, true) => 220,
            (WeekdayNight | Weekend, false) => 550,
            (WeekdayNight | Weekend, true) => 330,
        },
    }
}
