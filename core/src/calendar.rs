//! Calendar facts derived from the birth date.
//!
//! RULE: a bad date never crashes a generation. A string that fails to
//! parse yields the documented fallbacks (days alive 1, no calendar
//! placeholders) instead of an error.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

/// Parse an ISO `YYYY-MM-DD` date. None for anything unparsable,
/// including well-formed impossibilities like 1991-02-30.
pub fn parse_birth_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Month and day of the birth date, with the fixed mid-year fallback
/// (June 15) when the date does not parse. Never fails.
pub fn month_day_or_default(s: &str) -> (u32, u32) {
    match parse_birth_date(s) {
        Some(d) => (d.month(), d.day()),
        None => (6, 15),
    }
}

/// English weekday name, UTC calendar.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

pub fn is_leap_year(date: NaiveDate) -> bool {
    date.leap_year()
}

/// Whole days between the birth date and `now`, floored at 1.
/// A birth date in the future clamps to 1 rather than going negative.
pub fn days_alive(birth: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - birth).num_days().max(1)
}
