//! age.rs
//!
//! Calendar-aware year/month/day spans, in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month before the reference date)
//!   • leap years
//!   • varying month lengths
//!
//! A birth day past the end of the borrowed month (born on the 31st, counted
//! on the 1st after a 28-day February) leaves a negative day component; the
//! borrow is applied once and never repeated.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::calendar::days_in_month;
use crate::format::{Locale, Unit, quantity};

/// Elapsed calendar time between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AgeDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl AgeDuration {
    /// Lists all three components, e.g. `"34 years, 0 months, 0 days"`.
    pub fn describe(&self, locale: Locale) -> String {
        format!(
            "{}, {}, {}",
            quantity(self.years.into(), Unit::Year, locale),
            quantity(self.months.into(), Unit::Month, locale),
            quantity(self.days.into(), Unit::Day, locale)
        )
    }

    /// Like [`describe`](Self::describe) but drops non-positive components,
    /// falling back to `"0 days"`.
    pub fn compact(&self, locale: Locale) -> String {
        let parts: Vec<String> = [
            (self.years, Unit::Year),
            (self.months, Unit::Month),
            (self.days, Unit::Day),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| quantity(n.into(), unit, locale))
        .collect();

        if parts.is_empty() {
            quantity(0, Unit::Day, locale)
        } else {
            parts.join(", ")
        }
    }
}

/// Returns the age of someone born on `birthdate` as of `today`.
pub fn calculate_age(birthdate: NaiveDate, today: NaiveDate) -> AgeDuration {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Month before `today`; month0 of -1 rolls back into December.
        let days_in_prev_month = days_in_month(today.year(), today.month0() as i32 - 1);
        days += days_in_prev_month as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    trace!(%birthdate, %today, years, months, days, "age computed");
    AgeDuration {
        years,
        months,
        days,
    }
}

/// Calendar span between two dates regardless of their order.
pub fn date_difference(a: NaiveDate, b: NaiveDate) -> AgeDuration {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    calculate_age(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(years: i32, months: i32, days: i32) -> AgeDuration {
        AgeDuration {
            years,
            months,
            days,
        }
    }

    #[test]
    fn whole_years() {
        assert_eq!(span(34, 0, 0), calculate_age(ymd(1990, 1, 1), ymd(2024, 1, 1)));
    }

    #[test]
    fn borrows_days_from_previous_month() {
        // March 2024 has 31 days before April
        assert_eq!(span(0, 0, 26), calculate_age(ymd(2024, 3, 10), ymd(2024, 4, 5)));
        // leap February
        assert_eq!(span(0, 0, 27), calculate_age(ymd(2024, 2, 10), ymd(2024, 3, 8)));
        // common February
        assert_eq!(span(0, 0, 26), calculate_age(ymd(2023, 2, 10), ymd(2023, 3, 8)));
    }

    #[test]
    fn borrows_months_from_years() {
        assert_eq!(span(33, 11, 0), calculate_age(ymd(1990, 2, 1), ymd(2024, 1, 1)));
        assert_eq!(span(1, 10, 17), calculate_age(ymd(2022, 2, 15), ymd(2024, 1, 1)));
    }

    #[test]
    fn january_borrows_from_december() {
        assert_eq!(span(0, 0, 21), calculate_age(ymd(2023, 12, 20), ymd(2024, 1, 10)));
    }

    #[test]
    fn short_borrowed_month_keeps_negative_days() {
        assert_eq!(span(0, 1, -2), calculate_age(ymd(2023, 1, 31), ymd(2023, 3, 1)));
    }

    #[test]
    fn difference_ignores_order() {
        let a = ymd(2025, 8, 7);
        let b = ymd(2026, 10, 17);
        assert_eq!(span(1, 2, 10), date_difference(a, b));
        assert_eq!(date_difference(a, b), date_difference(b, a));
        assert_eq!(AgeDuration::default(), date_difference(a, a));
    }

    #[test]
    fn describe_lists_every_unit() {
        assert_eq!(
            "34 years, 0 months, 1 day",
            span(34, 0, 1).describe(Locale::English)
        );
        assert_eq!(
            "1 ano, 1 mês, 2 dias",
            span(1, 1, 2).describe(Locale::Portuguese)
        );
    }

    #[test]
    fn compact_skips_zero_units() {
        assert_eq!("1 year, 10 days", span(1, 0, 10).compact(Locale::English));
        assert_eq!("2 meses", span(0, 2, 0).compact(Locale::Portuguese));
        assert_eq!("0 days", AgeDuration::default().compact(Locale::English));
    }
}
