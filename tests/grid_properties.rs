// Property-based tests for the month grid generator

use proptest::prelude::*;

use shift_calendar::models::FirstDayOfWeek;
use shift_calendar::services::grid::generate_month_grid;
use shift_calendar::utils::date::days_in_month;

fn any_first_day() -> impl Strategy<Value = FirstDayOfWeek> {
    prop_oneof![
        Just(FirstDayOfWeek::Monday),
        Just(FirstDayOfWeek::Sunday),
    ]
}

proptest! {
    /// The grid is always 5 or 6 full weeks.
    #[test]
    fn prop_grid_length_is_full_weeks(
        year in 1970..2100i32,
        month0 in 0..12u32,
        first_day in any_first_day(),
    ) {
        let cells = generate_month_grid(year, month0, first_day);
        prop_assert_eq!(cells.len() % 7, 0);
        prop_assert!(cells.len() == 35 || cells.len() == 42);
    }

    /// Every day of the target month appears exactly once, in order, and
    /// outside-month cells never carry the target month.
    #[test]
    fn prop_grid_covers_month_without_overlap(
        year in 1970..2100i32,
        month0 in 0..12u32,
        first_day in any_first_day(),
    ) {
        let cells = generate_month_grid(year, month0, first_day);

        let current: Vec<u32> = cells
            .iter()
            .filter(|c| !c.outside_month)
            .map(|c| c.day)
            .collect();
        let expected: Vec<u32> = (1..=days_in_month(year, month0)).collect();
        prop_assert_eq!(current, expected);

        for cell in cells.iter().filter(|c| c.outside_month) {
            prop_assert!(
                !(cell.date_key.year == year && cell.date_key.month0 == month0),
                "outside-month cell {:?} carries the target month",
                cell
            );
        }
    }

    /// Leading and trailing padding are contiguous blocks around the month.
    #[test]
    fn prop_padding_surrounds_month(
        year in 1970..2100i32,
        month0 in 0..12u32,
        first_day in any_first_day(),
    ) {
        let cells = generate_month_grid(year, month0, first_day);

        let leading = cells.iter().take_while(|c| c.outside_month).count();
        let trailing = cells.iter().rev().take_while(|c| c.outside_month).count();
        let days = days_in_month(year, month0) as usize;

        prop_assert!(leading < 7);
        prop_assert_eq!(leading + days + trailing, cells.len());
    }

    /// Each cell's date key names the day shown in the cell.
    #[test]
    fn prop_date_keys_match_cell_days(
        year in 1970..2100i32,
        month0 in 0..12u32,
        first_day in any_first_day(),
    ) {
        for cell in generate_month_grid(year, month0, first_day) {
            prop_assert_eq!(cell.date_key.day, cell.day);
            prop_assert!(cell.date_key.to_date().is_some());
        }
    }
}
