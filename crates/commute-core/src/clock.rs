//! Day clock and weather tracking for the Commute simulation.
//!
//! The clock is the single source of truth for temporal state: the current
//! day number, today's weather, and yesterday's. `change_in_weather` -- the
//! flag every mode choice needs -- is derived here by comparing the two,
//! never stored independently.

use commute_types::Weather;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Day counter would overflow.
    #[error("day counter overflow: cannot advance beyond u64::MAX")]
    DayOverflow,
}

/// Tracks the current simulated day and its weather.
///
/// The clock starts before day 1; the first [`DayClock::advance`] begins
/// day 1 with no previous weather, so `change_in_weather` is `false` until
/// a second day exists to compare against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClock {
    /// Current day number (0 = not yet started).
    day: u64,
    /// Today's weather, once the first day has started.
    today: Option<Weather>,
    /// Yesterday's weather, once two days have been seen.
    yesterday: Option<Weather>,
}

impl DayClock {
    /// Create a clock positioned before the first day.
    pub const fn new() -> Self {
        Self {
            day: 0,
            today: None,
            yesterday: None,
        }
    }

    /// Begin the next day with the given weather. Returns the new day
    /// number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::DayOverflow`] if the day counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self, weather: Weather) -> Result<u64, ClockError> {
        self.day = self.day.checked_add(1).ok_or(ClockError::DayOverflow)?;
        self.yesterday = self.today;
        self.today = Some(weather);
        Ok(self.day)
    }

    /// Current day number (0 before the first [`DayClock::advance`]).
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Today's weather, if a day has started.
    pub const fn today(&self) -> Option<Weather> {
        self.today
    }

    /// Whether today's weather differs from yesterday's.
    ///
    /// The first day has nothing to compare against and reports `false`.
    pub fn change_in_weather(&self) -> bool {
        match (self.yesterday, self.today) {
            (Some(yesterday), Some(today)) => yesterday != today,
            _ => false,
        }
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_before_day_one() {
        let clock = DayClock::new();
        assert_eq!(clock.day(), 0);
        assert_eq!(clock.today(), None);
        assert!(!clock.change_in_weather());
    }

    #[test]
    fn advance_counts_days() {
        let mut clock = DayClock::new();
        assert_eq!(clock.advance(Weather::Good).unwrap(), 1);
        assert_eq!(clock.advance(Weather::Good).unwrap(), 2);
        assert_eq!(clock.day(), 2);
    }

    #[test]
    fn first_day_reports_no_change() {
        let mut clock = DayClock::new();
        let _ = clock.advance(Weather::Bad).unwrap();
        assert!(!clock.change_in_weather());
    }

    #[test]
    fn change_detected_between_differing_days() {
        let mut clock = DayClock::new();
        let _ = clock.advance(Weather::Good).unwrap();
        let _ = clock.advance(Weather::Bad).unwrap();
        assert!(clock.change_in_weather());

        let _ = clock.advance(Weather::Bad).unwrap();
        assert!(!clock.change_in_weather());
    }
}
