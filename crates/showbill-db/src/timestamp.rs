//! Show start-time parsing.
//!
//! Start times are stored as the submitted string. Everything that needs to
//! reason about them (form validation, past/upcoming split, display) goes
//! through [`parse_start_time`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a start time into a naive UTC timestamp.
///
/// Offsets in RFC 3339 input are folded into UTC; values without an offset
/// are taken as UTC already. A bare date means midnight.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// A show is upcoming when it starts at or after `now`. Unreadable start
/// times are kept on the upcoming side so they stay visible.
pub fn is_upcoming(start_time: &str, now: NaiveDateTime) -> bool {
    parse_start_time(start_time).map_or(true, |t| t >= now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_rfc3339_with_millis() {
        assert_eq!(
            parse_start_time("2019-05-21T21:30:00.000Z"),
            Some(at(2019, 5, 21, 21, 30))
        );
    }

    #[test]
    fn test_parse_rfc3339_offset_folds_to_utc() {
        assert_eq!(
            parse_start_time("2019-05-21T21:30:00+02:00"),
            Some(at(2019, 5, 21, 19, 30))
        );
    }

    #[test]
    fn test_parse_naive_variants() {
        let expected = Some(at(2035, 4, 1, 20, 0));
        assert_eq!(parse_start_time("2035-04-01 20:00:00"), expected);
        assert_eq!(parse_start_time("2035-04-01T20:00:00"), expected);
        assert_eq!(parse_start_time("2035-04-01 20:00"), expected);
        assert_eq!(parse_start_time("2035-04-01T20:00"), expected);
        assert_eq!(parse_start_time(" 2035-04-01 20:00 "), expected);
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_start_time("2035-04-01"), Some(at(2035, 4, 1, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("next tuesday"), None);
        assert_eq!(parse_start_time("2035-13-01"), None);
    }

    #[test]
    fn test_is_upcoming() {
        let now = at(2024, 1, 1, 12, 0);
        assert!(is_upcoming("2035-04-01T20:00:00.000Z", now));
        assert!(is_upcoming("2024-01-01 12:00", now));
        assert!(!is_upcoming("2019-05-21T21:30:00.000Z", now));
        assert!(is_upcoming("whenever", now));
    }
}
