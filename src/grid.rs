//! grid.rs
//!
//! Month grids for calendar views.
//!
//! A grid is a flat run of cells, Sunday first, always holding complete
//! weeks: the tail of the previous month, every day of the requested month,
//! and as many days of the next month as it takes to finish the last row.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{days_in_month, month_start, week_number, weekday_index};

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDay {
    /// The date this cell stands for, possibly in a neighbouring month.
    pub date: NaiveDate,
    /// Day of month within the cell's own month.
    pub day: u32,
    pub is_current_month: bool,
    pub is_today: bool,
}

/// A grid row with the week number shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week {
    pub number: u32,
    pub days: Vec<CalendarDay>,
}

/// Builds the padded grid for a zero-based month.
///
/// The length is always a multiple of 7. Years outside chrono's range give an
/// empty grid.
pub fn generate_grid(year: i32, month0: i32, today: NaiveDate) -> Vec<CalendarDay> {
    let Some(first) = month_start(year, month0) else {
        return Vec::new();
    };
    let len = days_in_month(year, month0);
    let lead = weekday_index(first);

    let mut cells = Vec::with_capacity(42);

    for back in (1..=lead).rev() {
        if let Some(date) = first.checked_sub_days(Days::new(u64::from(back))) {
            cells.push(other_month(date));
        }
    }

    for offset in 0..len {
        let Some(date) = first.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        cells.push(CalendarDay {
            date,
            day: date.day(),
            is_current_month: true,
            is_today: date == today,
        });
    }

    let Some(next) = first.checked_add_days(Days::new(u64::from(len))) else {
        return cells;
    };
    let mut offset = 0;
    while cells.len() % 7 != 0 {
        let Some(date) = next.checked_add_days(Days::new(offset)) else {
            break;
        };
        cells.push(other_month(date));
        offset += 1;
    }

    debug!(year, month0, lead, cells = cells.len(), "month grid generated");
    cells
}

fn other_month(date: NaiveDate) -> CalendarDay {
    CalendarDay {
        date,
        day: date.day(),
        is_current_month: false,
        is_today: false,
    }
}

/// Splits the month grid into rows of seven.
///
/// Each row is numbered by the ISO week of its first cell when that cell
/// belongs to the month, and by the week of day 1 otherwise.
pub fn weeks(year: i32, month0: i32, today: NaiveDate) -> Vec<Week> {
    let grid = generate_grid(year, month0, today);
    let Some(first) = month_start(year, month0) else {
        return Vec::new();
    };

    grid.chunks(7)
        .map(|row| {
            let anchor = if row[0].is_current_month {
                row[0].date
            } else {
                first
            };
            Week {
                number: week_number(anchor),
                days: row.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(cells: &[CalendarDay]) -> Vec<u32> {
        cells.iter().map(|c| c.day).collect()
    }

    #[test]
    fn march_2024() {
        let grid = generate_grid(2024, 2, ymd(2024, 3, 15));
        assert_eq!(31, grid.iter().filter(|c| c.is_current_month).count());

        // March 1st 2024 is a Friday: five days of February lead in, and the
        // 36 cells spill into a sixth row.
        assert_eq!(42, grid.len());
        assert_eq!(vec![25, 26, 27, 28, 29], days(&grid[..5]));
        assert!(grid[..5].iter().all(|c| !c.is_current_month && !c.is_today));
        assert_eq!(ymd(2024, 2, 25), grid[0].date);

        assert_eq!(1, grid[5].day);
        assert!(grid[5].is_current_month);
        assert_eq!(31, grid[35].day);

        assert_eq!(vec![1, 2, 3, 4, 5, 6], days(&grid[36..]));
        assert!(grid[36..].iter().all(|c| !c.is_current_month));
        assert_eq!(ymd(2024, 4, 6), grid[41].date);
    }

    #[test]
    fn marks_only_today() {
        let grid = generate_grid(2024, 2, ymd(2024, 3, 15));
        let today: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(1, today.len());
        assert_eq!(15, today[0].day);
        assert!(today[0].is_current_month);

        let elsewhere = generate_grid(2024, 3, ymd(2024, 3, 15));
        assert!(elsewhere.iter().all(|c| !c.is_today));
    }

    #[test]
    fn today_in_padding_is_not_marked() {
        // 2024-04-01 shows up as a trailing cell of the March grid.
        let grid = generate_grid(2024, 2, ymd(2024, 4, 1));
        assert!(grid.iter().all(|c| !c.is_today));
    }

    #[test]
    fn exact_weeks_get_no_padding() {
        // February 2015 starts on a Sunday and has 28 days.
        let grid = generate_grid(2015, 1, ymd(2024, 1, 1));
        assert_eq!(28, grid.len());
        assert!(grid.iter().all(|c| c.is_current_month));
    }

    #[test]
    fn sunday_start_has_no_lead() {
        // September 2024: Sunday start, 30 days, five trailing October days.
        let grid = generate_grid(2024, 8, ymd(2024, 1, 1));
        assert_eq!(35, grid.len());
        assert_eq!(1, grid[0].day);
        assert!(grid[0].is_current_month);
        assert_eq!(vec![1, 2, 3, 4, 5], days(&grid[30..]));
    }

    #[test]
    fn month_index_rolls_over() {
        assert_eq!(
            generate_grid(2025, 0, ymd(2024, 1, 1)),
            generate_grid(2024, 12, ymd(2024, 1, 1))
        );
    }

    #[test]
    fn out_of_range_year_is_empty() {
        assert!(generate_grid(i32::MAX, 0, ymd(2024, 1, 1)).is_empty());
        assert!(weeks(i32::MAX, 0, ymd(2024, 1, 1)).is_empty());
    }

    #[test]
    fn week_rows_carry_iso_numbers() {
        let rows = weeks(2024, 0, ymd(2024, 1, 1));
        // January 2024 starts on a Monday: one lead-in day.
        assert_eq!(5, rows.len());
        assert!(rows.iter().all(|w| w.days.len() == 7));
        // First row starts in December, so day 1 anchors it.
        assert_eq!(1, rows[0].number);
        // Later rows start on Sundays, which close the previous ISO week.
        assert_eq!(vec![1, 1, 2, 3, 4], rows.iter().map(|w| w.number).collect::<Vec<_>>());
        assert_eq!(ymd(2024, 1, 7), rows[1].days[0].date);
    }
}
