/// Minute of day at which the nightly maintenance window opens (23:30).
const MAINTENANCE_OPEN: u16 = 23 * 60 + 30;
/// Minute of day at which the maintenance window closes (00:30).
const MAINTENANCE_CLOSE: u16 = 30;

const DAYTIME_OPEN: u16 = 8 * 60;
const DAYTIME_CLOSE: u16 = 18 * 60;

const LARGE_WINDOW_OPEN: u16 = 9 * 60;
const LARGE_WINDOW_CLOSE: u16 = 15 * 60;

/// Fee-table time zone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneClass {
    WeekdayDaytime,
    WeekdayNight,
    Weekend,
}

/// Simulated wall clock. Time never advances on its own, it only changes
/// through an explicit `set` (the SET_TIME command).
///
/// The default value is Monday 00:00, which lies inside the maintenance
/// window: until the first SET_TIME every transaction is rejected, so an
/// unset clock can never let a time-dependent rule pass by accident.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// Minute of day, `0..1440`.
    minute: u16,
    /// `0` = Monday .. `6` = Sunday.
    weekday: u8,
}

impl Default for Clock {
    fn default() -> Self {
        Self { minute: 0, weekday: 0 }
    }
}

impl Clock {
    pub fn set(&mut self, minute: u16, weekday: u8) {
        self.minute = minute;
        self.weekday = weekday;
    }

    pub fn minute(&self) -> u16 {
        self.minute
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Daily 23:30-00:30 window, wraps around midnight, day-independent.
    pub fn is_maintenance_window(&self) -> bool {
        self.minute >= MAINTENANCE_OPEN || self.minute < MAINTENANCE_CLOSE
    }

    pub fn is_weekday(&self) -> bool {
        self.weekday < 5
    }

    /// Zone used to key the fee table. Maintenance-window times still map
    /// to a zone; maintenance is rejected separately before any fee lookup.
    pub fn zone_class(&self) -> ZoneClass {
        if !self.is_weekday() {
            ZoneClass::Weekend
        } else if (DAYTIME_OPEN..DAYTIME_CLOSE).contains(&self.minute) {
            ZoneClass::WeekdayDaytime
        } else {
            ZoneClass::WeekdayNight
        }
    }

    /// Weekday 09:00-15:00 inclusive, the only window accepting transfers
    /// of 1,000,000 or more.
    pub fn is_large_amount_window(&self) -> bool {
        self.is_weekday() && (LARGE_WINDOW_OPEN..=LARGE_WINDOW_CLOSE).contains(&self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(minute: u16, weekday: u8) -> Clock {
        let mut clock = Clock::default();
        clock.set(minute, weekday);
        clock
    }

    #[test]
    fn maintenance_window_boundaries() {
        assert!(at(23 * 60 + 30, 2).is_maintenance_window());
        assert!(at(29, 2).is_maintenance_window());
        assert!(at(0, 6).is_maintenance_window());
        assert!(!at(23 * 60 + 29, 2).is_maintenance_window());
        assert!(!at(30, 2).is_maintenance_window());
        assert!(!at(31, 2).is_maintenance_window());
    }

    #[test]
    fn maintenance_window_ignores_weekday() {
        for weekday in 0..7 {
            assert!(at(23 * 60 + 45, weekday).is_maintenance_window());
        }
    }

    #[test]
    fn zone_classification() {
        assert_eq!(at(10 * 60, 1).zone_class(), ZoneClass::WeekdayDaytime);
        assert_eq!(at(8 * 60, 4).zone_class(), ZoneClass::WeekdayDaytime);
        // 18:00 already counts as night
        assert_eq!(at(18 * 60, 1).zone_class(), ZoneClass::WeekdayNight);
        assert_eq!(at(7 * 60 + 59, 0).zone_class(), ZoneClass::WeekdayNight);
        assert_eq!(at(10 * 60, 5).zone_class(), ZoneClass::Weekend);
        assert_eq!(at(10 * 60, 6).zone_class(), ZoneClass::Weekend);
    }

    #[test]
    fn large_amount_window_boundaries() {
        assert!(at(9 * 60, 2).is_large_amount_window());
        assert!(at(15 * 60, 2).is_large_amount_window());
        assert!(!at(8 * 60 + 59, 2).is_large_amount_window());
        assert!(!at(15 * 60 + 1, 2).is_large_amount_window());
        // never on weekends
        assert!(!at(12 * 60, 6).is_large_amount_window());
    }

    #[test]
    fn default_clock_fails_closed() {
        assert!(Clock::default().is_maintenance_window());
    }
}
