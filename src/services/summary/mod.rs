// Summary calculator service
// Working-day counting and the monthly work-norm summary

use chrono::NaiveDate;

use crate::models::{MonthSummary, ShiftCategory, WorkingDays};
use crate::services::holidays::is_holiday;
use crate::services::store::EventStore;
use crate::utils::date::{days_in_month, is_weekday};

/// Hours in the reference day the monthly norm is computed against. The norm
/// is always 8-hour based regardless of the configured shift length.
const NORM_REFERENCE_HOURS: u32 = 8;

/// Count the working days of a month (`month0` zero-based).
///
/// A Monday–Friday day counts as working unless it is a public holiday, in
/// which case it counts as a holiday instead. Weekend days count as neither.
pub fn working_days(year: i32, month0: u32) -> WorkingDays {
    let mut result = WorkingDays::default();

    for day in 1..=days_in_month(year, month0) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, day) else {
            continue;
        };
        if !is_weekday(date) {
            continue;
        }
        if is_holiday(year, month0, day) {
            result.holiday_count += 1;
        } else {
            result.working_day_count += 1;
        }
    }

    result
}

/// Summarize one month of the event store against the work-hour norm.
///
/// `work_hours` is the configured shift length (1–24). Each label of each
/// matching entry is tallied once; unrecognized labels are not tallied.
/// Vacation days are tracked but excluded from the worked-day total.
pub fn summarize(store: &EventStore, year: i32, month0: u32, work_hours: u32) -> MonthSummary {
    let mut summary = MonthSummary::default();

    for (date, labels) in store {
        if !date.in_month(year, month0) {
            continue;
        }
        for label in labels {
            match ShiftCategory::classify(label) {
                ShiftCategory::Night => summary.night_shifts += 1,
                ShiftCategory::Day => summary.day_shifts += 1,
                ShiftCategory::Overtime => summary.overtime_days += 1,
                ShiftCategory::Vacation => summary.vacation_days += 1,
                ShiftCategory::Other => {}
            }
        }
    }

    summary.worked_days = summary.night_shifts + summary.day_shifts + summary.overtime_days;
    summary.worked_hours = summary.worked_days * work_hours;

    let month = working_days(year, month0);
    summary.holiday_count = month.holiday_count;
    summary.norm_hours = month.working_day_count * NORM_REFERENCE_HOURS;
    // A partial-day remainder always rounds the requirement up.
    summary.norm_shift_days = summary.norm_hours.div_ceil(work_hours);
    summary.day_delta = i64::from(summary.worked_days) - i64::from(summary.norm_shift_days);
    summary.hour_delta = i64::from(summary.worked_hours) - i64::from(summary.norm_hours);

    summary
}
