// Month summary models
// Raw category tallies plus the derived work-norm figures

/// Weekday/holiday breakdown of a calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingDays {
    /// Monday–Friday days that are not public holidays.
    pub working_day_count: u32,
    /// Monday–Friday days that fall on a public holiday.
    pub holiday_count: u32,
}

/// Result of summarizing one month of the event store against the work norm.
///
/// All values are integer day/hour counts. The deltas are signed: positive
/// means the norm was exceeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthSummary {
    pub night_shifts: u32,
    pub day_shifts: u32,
    pub overtime_days: u32,
    pub vacation_days: u32,
    /// Night + day + overtime; vacation is tracked but not worked.
    pub worked_days: u32,
    pub worked_hours: u32,
    /// Monthly norm in hours, always against an 8-hour reference day.
    pub norm_hours: u32,
    /// The norm re-expressed as configured-length shifts, rounded up.
    pub norm_shift_days: u32,
    pub day_delta: i64,
    pub hour_delta: i64,
    /// Mon–Fri public holidays in the month (already excluded from the norm).
    pub holiday_count: u32,
}

impl MonthSummary {
    /// Presentation flag: the hour balance is at or above the norm.
    pub fn is_over_norm(&self) -> bool {
        self.hour_delta >= 0
    }
}
