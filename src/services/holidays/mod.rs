// Holiday lookup service
// Literal per-year public holiday tables (Polish national holidays)

/// Public holidays as (zero-based month, day) pairs, one table per year.
/// Every date is listed literally, including the Easter-linked movable ones;
/// nothing is derived. Years without a table have no known holidays.
const HOLIDAYS_2024: &[(u32, u32)] = &[
    (0, 1),   // New Year's Day
    (0, 6),   // Epiphany
    (2, 31),  // Easter Sunday
    (3, 1),   // Easter Monday
    (4, 1),   // Labour Day
    (4, 3),   // Constitution Day
    (4, 19),  // Pentecost
    (4, 30),  // Corpus Christi
    (7, 15),  // Assumption of Mary
    (10, 1),  // All Saints' Day
    (10, 11), // Independence Day
    (11, 25), // Christmas Day
    (11, 26), // Second Day of Christmas
];

const HOLIDAYS_2025: &[(u32, u32)] = &[
    (0, 1),   // New Year's Day
    (0, 6),   // Epiphany
    (3, 20),  // Easter Sunday
    (3, 21),  // Easter Monday
    (4, 1),   // Labour Day
    (4, 3),   // Constitution Day
    (5, 8),   // Pentecost
    (5, 19),  // Corpus Christi
    (7, 15),  // Assumption of Mary
    (10, 1),  // All Saints' Day
    (10, 11), // Independence Day
    (11, 25), // Christmas Day
    (11, 26), // Second Day of Christmas
];

const HOLIDAYS_2026: &[(u32, u32)] = &[
    (0, 1),   // New Year's Day
    (0, 6),   // Epiphany
    (3, 5),   // Easter Sunday
    (3, 6),   // Easter Monday
    (4, 1),   // Labour Day
    (4, 3),   // Constitution Day
    (4, 24),  // Pentecost
    (5, 4),   // Corpus Christi
    (7, 15),  // Assumption of Mary
    (10, 1),  // All Saints' Day
    (10, 11), // Independence Day
    (11, 25), // Christmas Day
    (11, 26), // Second Day of Christmas
];

fn table_for(year: i32) -> &'static [(u32, u32)] {
    match year {
        2024 => HOLIDAYS_2024,
        2025 => HOLIDAYS_2025,
        2026 => HOLIDAYS_2026,
        _ => &[],
    }
}

/// Whether the given date (`month0` zero-based) is a public holiday.
/// Years absent from the table yield false for every date.
pub fn is_holiday(year: i32, month0: u32, day: u32) -> bool {
    table_for(year).contains(&(month0, day))
}
