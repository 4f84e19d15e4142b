//! Clock abstraction for deterministic "today" in services and tests.

use chrono::{Local, NaiveDate};

/// Source of the current local date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The system's local date
    #[default]
    System,
    /// A pinned date
    Fixed(NaiveDate),
}

impl Clock {
    /// A clock pinned to `date`.
    pub fn fixed(date: NaiveDate) -> Self {
        Self::Fixed(date)
    }

    /// Today's date according to this clock.
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let clock = Clock::fixed(start);
        assert_eq!(clock.today(), start);
        assert_eq!(clock, Clock::Fixed(start));
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Clock::default(), Clock::System);
    }
}
