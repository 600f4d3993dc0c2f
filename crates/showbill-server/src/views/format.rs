//! Start-time display formats.

use showbill_db::timestamp::parse_start_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Formats a stored start time for display. Values that do not parse are
/// shown as stored.
pub fn format_datetime(value: &str, format: DateFormat) -> String {
    match parse_start_time(value) {
        Some(dt) => dt.format(format.pattern()).to_string(),
        None => value.to_string(),
    }
}
