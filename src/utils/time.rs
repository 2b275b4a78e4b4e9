//! Time utilities: the on-disk timestamp format, parsing it back, durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, TimeDelta};

/// Stored timestamp format, e.g. `01-01-2024 10:05:30`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Duration between two stored timestamps.
pub fn duration_between(start: &str, stop: &str) -> AppResult<TimeDelta> {
    Ok(parse_timestamp(stop)? - parse_timestamp(start)?)
}

/// Render a duration as `H:MM:SS` (hours are not wrapped at 24).
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamps_use_day_month_year() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 4, 5)
            .unwrap();
        assert_eq!(format_timestamp(&t), "07-03-2024 09:04:05");
        assert_eq!(parse_timestamp("07-03-2024 09:04:05").unwrap(), t);
    }

    #[test]
    fn five_and_a_half_minutes() {
        let d = duration_between("01-01-2024 10:00:00", "01-01-2024 10:05:30").unwrap();
        assert_eq!(d, TimeDelta::seconds(5 * 60 + 30));
        assert_eq!(format_duration(d), "0:05:30");
    }

    #[test]
    fn durations_over_a_day_keep_counting_hours() {
        let d = duration_between("31-12-2023 23:00:00", "02-01-2024 01:00:01").unwrap();
        assert_eq!(format_duration(d), "26:00:01");
    }

    #[test]
    fn sentinel_is_not_a_timestamp() {
        assert!(matches!(
            parse_timestamp("TBD"),
            Err(AppError::InvalidTimestamp(s)) if s == "TBD"
        ));
    }

    #[test]
    fn negative_durations_carry_a_sign() {
        assert_eq!(format_duration(TimeDelta::seconds(-61)), "-0:01:01");
    }
}
