//! Time formatting helpers.

use chrono::Duration;

/// Format a selection window's length for the raffle summary, e.g. a
/// week-long draw prints as `7d 0h`. Negative spans print as `0s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_sensible_unit() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::seconds(125)), "2m 5s");
        assert_eq!(format_duration(Duration::minutes(90)), "1h 30m");
        assert_eq!(format_duration(Duration::days(7)), "7d 0h");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
    }
}
