// Grid generator service
// Pure computation of the monthly calendar grid

use crate::models::{DateKey, FirstDayOfWeek, GridCell};
use crate::utils::date::{days_in_month, first_weekday_index, next_month, prev_month};

/// Generate the cell sequence for one month of the calendar.
///
/// The grid always spans 5 or 6 full weeks (35 or 42 cells): leading cells
/// are drawn from the end of the previous month, trailing cells from the
/// start of the next, both flagged `outside_month`. With a Monday week start
/// the raw Sunday-based weekday index is rotated so Sunday lands in column 6.
pub fn generate_month_grid(year: i32, month0: u32, first_day: FirstDayOfWeek) -> Vec<GridCell> {
    let days = days_in_month(year, month0);
    let raw_weekday = first_weekday_index(year, month0);
    let leading = match first_day {
        FirstDayOfWeek::Monday => (raw_weekday + 6) % 7,
        FirstDayOfWeek::Sunday => raw_weekday,
    };

    let mut cells = Vec::with_capacity(42);

    let (prev_year, prev_month0) = prev_month(year, month0);
    let prev_days = days_in_month(prev_year, prev_month0);
    for day in (prev_days - leading + 1)..=prev_days {
        cells.push(GridCell::new(
            day,
            DateKey::new(prev_year, prev_month0, day),
            true,
        ));
    }

    for day in 1..=days {
        cells.push(GridCell::new(day, DateKey::new(year, month0, day), false));
    }

    // Pad to 5 full weeks, or 6 when the month spills past 35 cells.
    let total = leading + days;
    let target = if total > 35 { 42 } else { 35 };
    let (next_year, next_month0) = next_month(year, month0);
    for day in 1..=(target - total) {
        cells.push(GridCell::new(
            day,
            DateKey::new(next_year, next_month0, day),
            true,
        ));
    }

    cells
}

/// Weekday header labels in display order for the configured week start.
pub fn weekday_headers(first_day: FirstDayOfWeek) -> [&'static str; 7] {
    match first_day {
        FirstDayOfWeek::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        FirstDayOfWeek::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_april_2025_monday_start() {
        // April 2025 starts on a Tuesday: one leading cell (Mon, Mar 31).
        let cells = generate_month_grid(2025, 3, FirstDayOfWeek::Monday);
        assert_eq!(cells.len(), 35);

        assert_eq!(cells[0].day, 31);
        assert_eq!(cells[0].date_key, DateKey::new(2025, 2, 31));
        assert!(cells[0].outside_month);

        assert_eq!(cells[1].day, 1);
        assert_eq!(cells[1].date_key, DateKey::new(2025, 3, 1));
        assert!(!cells[1].outside_month);

        // 1 leading + 30 days = 31, padded to 35 with May 1-4.
        assert_eq!(cells[31].date_key, DateKey::new(2025, 4, 1));
        assert!(cells[31].outside_month);
        assert_eq!(cells[34].date_key, DateKey::new(2025, 4, 4));
    }

    #[test]
    fn test_sunday_starting_month_leading_counts() {
        // June 2025 starts on a Sunday.
        let monday_grid = generate_month_grid(2025, 5, FirstDayOfWeek::Monday);
        let leading_mon = monday_grid.iter().take_while(|c| c.outside_month).count();
        assert_eq!(leading_mon, 6);

        let sunday_grid = generate_month_grid(2025, 5, FirstDayOfWeek::Sunday);
        let leading_sun = sunday_grid.iter().take_while(|c| c.outside_month).count();
        assert_eq!(leading_sun, 0);
    }

    #[test]
    fn test_long_month_gets_six_weeks() {
        // March 2025 starts on a Saturday: 5 leading + 31 days = 36 > 35.
        let cells = generate_month_grid(2025, 2, FirstDayOfWeek::Monday);
        assert_eq!(cells.len(), 42);
    }

    #[test]
    fn test_january_leading_cells_roll_into_previous_year() {
        // January 2025 starts on a Wednesday: leading cells are Dec 2024.
        let cells = generate_month_grid(2025, 0, FirstDayOfWeek::Monday);
        assert_eq!(cells[0].date_key, DateKey::new(2024, 11, 30));
        assert_eq!(cells[1].date_key, DateKey::new(2024, 11, 31));
    }

    #[test]
    fn test_december_trailing_cells_roll_into_next_year() {
        let cells = generate_month_grid(2025, 11, FirstDayOfWeek::Monday);
        let last = cells.last().unwrap();
        assert_eq!(last.date_key.year, 2026);
        assert_eq!(last.date_key.month0, 0);
        assert!(last.outside_month);
    }

    #[test]
    fn test_current_month_cells_are_contiguous() {
        let cells = generate_month_grid(2025, 3, FirstDayOfWeek::Sunday);
        let current: Vec<u32> = cells
            .iter()
            .filter(|c| !c.outside_month)
            .map(|c| c.day)
            .collect();
        assert_eq!(current, (1..=30).collect::<Vec<_>>());
    }
}
