use chrono::{DateTime, Local, TimeZone};

/// Format used for every console timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a point in time as `[YYYY-MM-DD HH:MM:SS] `
pub fn timestamp_prefix<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("[{}] ", time.format(TIMESTAMP_FORMAT))
}

/// Timestamp prefix for the current local time
pub fn current_timestamp_prefix() -> String {
    timestamp_prefix(&Local::now())
}
