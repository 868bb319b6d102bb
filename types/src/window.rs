//! Half-open selection window `[start_time, end_time)` over UTC instants.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// The time range a raffle is drawn over.
///
/// A submission landing exactly on `end_time` belongs to the next window, so
/// adjacent windows never double-count a boundary submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl SelectionWindow {
    /// Create a window, rejecting `start_time >= end_time`.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<Self, TypesError> {
        let window = Self {
            start_time,
            end_time,
        };
        window.validate()?;
        Ok(window)
    }

    /// Window covering whole UTC days from `start_date` through `end_date` inclusive.
    pub fn from_dates(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, TypesError> {
        if end_date < start_date {
            return Err(TypesError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        let day_after = end_date
            .succ_opt()
            .ok_or(TypesError::DateOutOfRange(end_date))?;
        Self::new(midnight_utc(start_date), midnight_utc(day_after))
    }

    /// Check the `start_time < end_time` invariant. Fields are public, so
    /// consumers re-check before trusting a window.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.start_time >= self.end_time {
            return Err(TypesError::InvalidWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Whether `ts` falls in `[start_time, end_time)`.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start_time <= ts && ts < self.end_time
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// The window of equal length starting where this one ends.
    pub fn next(&self) -> Result<Self, TypesError> {
        let end_time = self
            .end_time
            .checked_add_signed(self.duration())
            .ok_or(TypesError::WindowOutOfRange { end: self.end_time })?;
        Ok(Self {
            start_time: self.end_time,
            end_time,
        })
    }
}

impl fmt::Display for SelectionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start_time.to_rfc3339(),
            self.end_time.to_rfc3339()
        )
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, d, h, 0, 0).unwrap()
    }

    #[test]
    fn equal_bounds_rejected() {
        let err = SelectionWindow::new(at(1, 0), at(1, 0)).unwrap_err();
        assert!(matches!(err, TypesError::InvalidWindow { .. }));
    }

    #[test]
    fn reversed_bounds_rejected() {
        assert!(SelectionWindow::new(at(2, 0), at(1, 0)).is_err());
    }

    #[test]
    fn contains_is_half_open() {
        let w = SelectionWindow::new(at(1, 0), at(2, 0)).unwrap();
        assert!(w.contains(at(1, 0)));
        assert!(w.contains(at(1, 23)));
        assert!(!w.contains(at(2, 0)));
        assert!(w.next().unwrap().contains(at(2, 0)));
    }

    #[test]
    fn next_near_max_time_is_an_error() {
        let end = DateTime::<Utc>::MAX_UTC - Duration::days(1);
        let w = SelectionWindow::new(end - Duration::days(10), end).unwrap();
        assert_eq!(w.next(), Err(TypesError::WindowOutOfRange { end }));
    }

    #[test]
    fn from_dates_includes_whole_end_day() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let w = SelectionWindow::from_dates(start, end).unwrap();
        assert_eq!(w.start_time, at(1, 0));
        assert_eq!(w.end_time, at(8, 0));
        assert!(w.contains(Utc.with_ymd_and_hms(2025, 8, 7, 23, 59, 59).unwrap()));
        assert_eq!(w.duration(), Duration::days(7));
    }

    #[test]
    fn from_dates_single_day() {
        let day = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let w = SelectionWindow::from_dates(day, day).unwrap();
        assert_eq!(w.duration(), Duration::days(1));
    }

    #[test]
    fn from_dates_reversed_rejected() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert!(matches!(
            SelectionWindow::from_dates(start, end),
            Err(TypesError::InvalidDateRange { .. })
        ));
    }
}
