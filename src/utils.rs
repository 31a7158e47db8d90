//! Utility functions for the rating tracker

use chrono::{DateTime, Local, TimeZone};

/// asctime-style layout, e.g. `Tue Mar  5 09:30:00 2024`
pub const MATCH_TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Get the current local timestamp
pub fn current_timestamp() -> DateTime<Local> {
    Local::now()
}

/// Human-readable, second-granularity label for a match time
pub fn format_match_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format(MATCH_TIMESTAMP_FORMAT).to_string()
}
