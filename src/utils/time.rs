//! Fixed-format date/time parsing for the sheet cells:
//! dates are `DD/MM/YYYY`, times are `HH:MM`.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).ok()
}

/// Combine a date cell and a time cell into a timestamp.
///
/// A blank time cell counts as `00:00` (the sheet convention for "not
/// filled in yet"). Returns None when either cell does not parse; the
/// caller decides what a missing timestamp means.
pub fn combine_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let d = parse_date(date)?;
    let t = if time.trim().is_empty() {
        NaiveTime::from_hms_opt(0, 0, 0)?
    } else {
        parse_time(time)?
    };
    Some(d.and_time(t))
}

/// Parse a date argument, failing loudly. Used at the CLI boundary where
/// bad input must be rejected instead of silently zeroed.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Parse a time argument, failing loudly. See [`require_date`].
pub fn require_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn today_str() -> String {
    chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
}
