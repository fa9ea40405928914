//! calendar.rs
//!
//! Calendar primitives shared by the grid, age and moon modules.
//!
//! Every function here is a pure computation over naive dates. Whatever the
//! caller treats as "now" is passed in explicitly; nothing reads the clock.
//!
//! Month indices are zero-based (`0` is January) wherever a bare number is
//! taken, and indices outside `0..=11` roll into the neighbouring years the
//! same way a native date type does when you construct "month 12" or "month -1".

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parses an ISO `YYYY-MM-DD` date. `None` marks an invalid date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Parses a `YYYY-MM` month selector into `(year, month0)`.
pub fn parse_month(input: &str) -> Option<(i32, u32)> {
    let (year, month) = input.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month - 1))
    } else {
        None
    }
}

/// Absolute number of days between two dates, rounded up.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    days_between_instants(midnight(a), midnight(b))
}

/// Absolute number of days between two instants, rounded up to whole days.
pub fn days_between_instants(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let millis = (b - a).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Signed number of days from `date` (at midnight) to `now`, rounded down.
///
/// Negative when `date` lies in the future. Unlike [`days_between`] this
/// floors, so any `now` during the same day counts as zero.
pub fn days_since(date: NaiveDate, now: NaiveDateTime) -> i64 {
    (now - midnight(date))
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

/// Day of week with Sunday as `0` and Saturday as `6`.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Returns number of days in a zero-based month (handles leap years).
pub fn days_in_month(year: i32, month0: i32) -> u32 {
    let (year, month) = normalize_month(year, month0);
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Folds an out-of-range zero-based month into `(year, month1)`.
pub(crate) fn normalize_month(year: i32, month0: i32) -> (i32, u32) {
    (
        year.saturating_add(month0.div_euclid(12)),
        month0.rem_euclid(12) as u32 + 1,
    )
}

/// First day of a zero-based month, `None` outside chrono's range.
pub(crate) fn month_start(year: i32, month0: i32) -> Option<NaiveDate> {
    let (year, month) = normalize_month(year, month0);
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Shifts `date` by whole months.
///
/// The day of month is kept literally and overflows into the following month
/// when the target month is shorter: Jan 31 + 1 month is Mar 2 in a leap year.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let month0 = (date.month0() as i32).checked_add(months)?;
    month_start(date.year(), month0)?.checked_add_days(Days::new(u64::from(date.day0())))
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let len = days_in_month(date.year(), date.month0() as i32);
    date + Days::new(u64::from(len - date.day()))
}

/// ISO-8601 week number: week 1 is the week holding the year's first Thursday.
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Quarter of the year, `1..=4`.
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() + 2) / 3
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
