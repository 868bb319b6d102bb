use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use rarelink_types::{SelectionWindow, TypesError};

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Seconds within roughly 1970..2100, well inside chrono's range.
const MAX_SECS: i64 = 4_102_444_800;

proptest! {
    /// A window can be built iff start < end.
    #[test]
    fn window_construction_matches_ordering(a in 0i64..MAX_SECS, b in 0i64..MAX_SECS) {
        let result = SelectionWindow::new(ts(a), ts(b));
        if a < b {
            prop_assert!(result.is_ok());
        } else {
            let is_invalid_window = matches!(result, Err(TypesError::InvalidWindow { .. }));
            prop_assert!(is_invalid_window);
        }
    }

    /// contains() agrees with start <= ts < end.
    #[test]
    fn window_contains_is_half_open(
        start in 0i64..MAX_SECS / 2,
        len in 1i64..10_000_000,
        probe in 0i64..MAX_SECS,
    ) {
        let window = SelectionWindow::new(ts(start), ts(start + len)).unwrap();
        prop_assert_eq!(window.contains(ts(probe)), start <= probe && probe < start + len);
    }

    /// Adjacent windows partition time: no instant belongs to both.
    #[test]
    fn adjacent_windows_never_overlap(
        start in 0i64..MAX_SECS / 2,
        len in 1i64..10_000_000,
        probe in 0i64..MAX_SECS,
    ) {
        let window = SelectionWindow::new(ts(start), ts(start + len)).unwrap();
        let next = window.next().unwrap();
        prop_assert!(!(window.contains(ts(probe)) && next.contains(ts(probe))));
    }

    /// Date windows span exactly (end - start + 1) days.
    #[test]
    fn date_window_spans_inclusive_days(offset in 0i64..20_000, days in 0i64..400) {
        let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset);
        let end = start + Duration::days(days);
        let window = SelectionWindow::from_dates(start, end).unwrap();
        prop_assert_eq!(window.duration(), Duration::days(days + 1));
    }
}
