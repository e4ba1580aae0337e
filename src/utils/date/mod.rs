// Date utility functions
// Month grid arithmetic and display formatting for the calendar widget

use chrono::{Datelike, NaiveDate};

/// Full month names, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of days in `month` (1-12) of `year`, proleptic Gregorian.
///
/// Returns 0 when the month lies outside chrono's representable range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .filter(|last| last.month() == month)
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Column of day 1 in a grid whose first column is `first_day_of_week`
/// (0 = Sunday). With a Sunday-first grid this is the plain weekday index.
pub fn first_weekday_index(year: i32, month: u32, first_day_of_week: u8) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let weekday = first.weekday().num_days_from_sunday();
    (weekday + 7 - u32::from(first_day_of_week % 7)) % 7
}

/// Cells of a month grid: leading `None` fillers so weekday columns align,
/// then `Some(day)` for every day of the month.
pub fn month_grid(year: i32, month: u32, first_day_of_week: u8) -> Vec<Option<u32>> {
    let fillers = first_weekday_index(year, month, first_day_of_week);
    let days = days_in_month(year, month);

    std::iter::repeat(None)
        .take(fillers as usize)
        .chain((1..=days).map(Some))
        .collect()
}

/// Weekday header labels starting at `first_day_of_week`
pub fn weekday_labels(first_day_of_week: u8) -> [&'static str; 7] {
    let start = first_day_of_week as usize;
    std::array::from_fn(|i| DAY_NAMES[(start + i) % 7])
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// "June, 2024" - the heading above the grid
pub fn format_month_heading(year: i32, month: u32) -> String {
    format!("{}, {}", month_name(month), year)
}

/// "June 15, 2024" - used by the event list and details modal
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2023, 2, 28 ; "common february")]
    #[test_case(1900, 2, 28 ; "century not leap")]
    #[test_case(2000, 2, 29 ; "quad century leap")]
    #[test_case(2024, 4, 30 ; "april")]
    #[test_case(2024, 12, 31 ; "december")]
    #[test_case(2025, 1, 31 ; "january")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test_case(2024, 6, 0, 6 ; "june 2024 starts saturday")]
    #[test_case(2024, 9, 0, 0 ; "september 2024 starts sunday")]
    #[test_case(2024, 9, 1, 6 ; "monday first grid")]
    #[test_case(2025, 1, 0, 3 ; "january 2025 starts wednesday")]
    fn test_first_weekday_index(year: i32, month: u32, first_day: u8, expected: u32) {
        assert_eq!(first_weekday_index(year, month, first_day), expected);
    }

    #[test]
    fn test_month_grid_layout() {
        let grid = month_grid(2024, 6, 0);
        assert_eq!(grid.len(), 6 + 30);
        assert!(grid[..6].iter().all(Option::is_none));
        assert_eq!(grid[6], Some(1));
        assert_eq!(grid.last(), Some(&Some(30)));
    }

    #[test]
    fn test_month_grid_without_fillers() {
        let grid = month_grid(2024, 9, 0);
        assert_eq!(grid.first(), Some(&Some(1)));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn test_weekday_labels_rotate() {
        assert_eq!(weekday_labels(0)[0], "Sun");
        assert_eq!(weekday_labels(1), ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(format_long_date(date), "June 5, 2024");
        assert_eq!(format_month_heading(2024, 12), "December, 2024");
        assert_eq!(month_name(13), "");
    }
}
