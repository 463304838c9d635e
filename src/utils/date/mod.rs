// Date utility functions
// Small chrono helpers shared by the grid generator and summary calculator

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in the given month (`month0` is zero-based).
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    // Day 0 of the next month is the last day of this one.
    let (next_year, next_month0) = next_month(year, month0);
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday of the first day of the month, with Sunday = 0 (as the grid
/// rotation expects).
pub fn first_weekday_index(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// The month before, rolling the year back over January.
pub fn prev_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}

/// The month after, rolling the year forward over December.
pub fn next_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    }
}
