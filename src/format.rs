//! format.rs
//!
//! Human-readable output for dates and day counts.
//!
//! Durations here are deliberately approximate: a year is 365 days and a
//! month is 30 days, whatever months the span actually covers. Use
//! [`crate::age::date_difference`] when calendar accuracy matters.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::weekday_index;

/// Language used for every piece of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pt" | "pt-br" | "portuguese" => Ok(Locale::Portuguese),
            other => Err(format!("unsupported locale `{other}` (expected en or pt)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::English => "en",
            Locale::Portuguese => "pt",
        })
    }
}

/// Output layout for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `dd/mm/yyyy`
    DayMonthYear,
    /// `mm-dd-yyyy`
    MonthDayYear,
    /// `yyyy-mm-dd`
    Iso,
    /// Weekday, day, month name and year written out.
    LongForm,
    /// `Fri Mar 15 2024`
    #[default]
    Default,
}

impl From<&str> for DateFormat {
    fn from(key: &str) -> Self {
        match key {
            "dd/mm/yyyy" => DateFormat::DayMonthYear,
            "mm-dd-yyyy" => DateFormat::MonthDayYear,
            "yyyy-mm-dd" => DateFormat::Iso,
            "extenso" => DateFormat::LongForm,
            _ => DateFormat::Default,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
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

const MONTHS_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

// Sunday first, matching `weekday_index`.
const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_PT: [&str; 7] = [
    "Domingo",
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
];

/// Full month name for a zero-based month (wraps modulo 12).
pub fn month_name(month0: u32, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::English => &MONTHS_EN,
        Locale::Portuguese => &MONTHS_PT,
    };
    names[(month0 % 12) as usize]
}

/// Full weekday name for a date.
pub fn weekday_name(date: NaiveDate, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::English => &WEEKDAYS_EN,
        Locale::Portuguese => &WEEKDAYS_PT,
    };
    names[weekday_index(date) as usize]
}

/// Formats `date` in the requested layout.
///
/// Numeric layouts are locale-independent. The long form follows the
/// locale's word order; [`DateFormat::Default`] always uses the compact
/// English `Fri Mar 15 2024` representation.
pub fn format_date(date: NaiveDate, format: DateFormat, locale: Locale) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match format {
        DateFormat::DayMonthYear => format!("{d:02}/{m:02}/{y:04}"),
        DateFormat::MonthDayYear => format!("{m:02}-{d:02}-{y:04}"),
        DateFormat::Iso => format!("{y:04}-{m:02}-{d:02}"),
        DateFormat::LongForm => {
            let weekday = weekday_name(date, locale);
            let month = month_name(date.month0(), locale);
            match locale {
                Locale::Portuguese => format!("{weekday}, {d:02} de {month} de {y}"),
                Locale::English => format!("{weekday}, {month} {d:02}, {y}"),
            }
        }
        DateFormat::Default => date.format("%a %b %d %Y").to_string(),
    }
}

#[derive(Clone, Copy)]
pub(crate) enum Unit {
    Year,
    Month,
    Day,
}

/// `"1 month"`, `"3 meses"`, ... singular only for exactly one.
pub(crate) fn quantity(n: i64, unit: Unit, locale: Locale) -> String {
    let one = n == 1;
    let word = match (locale, unit) {
        (Locale::English, Unit::Year) => plural(one, "year", "years"),
        (Locale::English, Unit::Month) => plural(one, "month", "months"),
        (Locale::English, Unit::Day) => plural(one, "day", "days"),
        (Locale::Portuguese, Unit::Year) => plural(one, "ano", "anos"),
        (Locale::Portuguese, Unit::Month) => plural(one, "mês", "meses"),
        (Locale::Portuguese, Unit::Day) => plural(one, "dia", "dias"),
    };
    format!("{n} {word}")
}

fn plural(one: bool, singular: &'static str, plural: &'static str) -> &'static str {
    if one { singular } else { plural }
}

/// Approximate breakdown of a day count, e.g. `"1 year, 1 month, 5 days"`.
///
/// Zero components are left out; a span with nothing left reads `"0 days"`.
pub fn format_duration(total_days: i64, locale: Locale) -> String {
    let years = total_days / 365;
    let rest = total_days % 365;
    let months = rest / 30;
    let days = rest % 30;

    let parts: Vec<String> = [(years, Unit::Year), (months, Unit::Month), (days, Unit::Day)]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| quantity(n, unit, locale))
        .collect();

    if parts.is_empty() {
        quantity(0, Unit::Day, locale)
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn numeric_layouts() {
        let date = ymd(2024, 3, 5);
        assert_eq!("05/03/2024", format_date(date, "dd/mm/yyyy".into(), Locale::English));
        assert_eq!("03-05-2024", format_date(date, "mm-dd-yyyy".into(), Locale::English));
        assert_eq!("2024-03-05", format_date(date, "yyyy-mm-dd".into(), Locale::Portuguese));
    }

    #[test]
    fn long_form() {
        let date = ymd(2024, 3, 15);
        assert_eq!(
            "Sexta-feira, 15 de Março de 2024",
            format_date(date, DateFormat::LongForm, Locale::Portuguese)
        );
        assert_eq!(
            "Friday, March 15, 2024",
            format_date(date, DateFormat::LongForm, Locale::English)
        );
        assert_eq!(
            "Segunda-feira, 01 de Janeiro de 2024",
            format_date(ymd(2024, 1, 1), "extenso".into(), Locale::Portuguese)
        );
    }

    #[test]
    fn unknown_format_falls_back_to_default() {
        assert_eq!(DateFormat::Default, DateFormat::from("dd.mm.yy"));
        assert_eq!(
            "Fri Mar 15 2024",
            format_date(ymd(2024, 3, 15), "whatever".into(), Locale::Portuguese)
        );
    }

    #[test]
    fn iso_format_parses_back() {
        for date in [ymd(2024, 2, 29), ymd(1999, 12, 31), ymd(2000, 1, 1), ymd(33, 7, 4)] {
            let text = format_date(date, DateFormat::Iso, Locale::English);
            assert_eq!(Some(date), parse_date(&text), "{text}");
        }
    }

    #[test]
    fn durations() {
        assert_eq!("0 days", format_duration(0, Locale::English));
        assert_eq!("15 days", format_duration(15, Locale::English));
        assert_eq!("1 day", format_duration(1, Locale::English));
        assert_eq!("1 month, 15 days", format_duration(45, Locale::English));
        assert_eq!("1 year, 1 month, 5 days", format_duration(400, Locale::English));
        assert_eq!("2 years", format_duration(730, Locale::English));
        assert_eq!("1 year, 2 months", format_duration(425, Locale::English));
    }

    #[test]
    fn durations_in_portuguese() {
        assert_eq!("0 dias", format_duration(0, Locale::Portuguese));
        assert_eq!("15 dias", format_duration(15, Locale::Portuguese));
        assert_eq!("1 mês, 15 dias", format_duration(45, Locale::Portuguese));
        assert_eq!("2 anos, 3 meses, 1 dia", format_duration(821, Locale::Portuguese));
    }

    #[test]
    fn locale_from_str() {
        assert_eq!(Ok(Locale::Portuguese), "pt".parse());
        assert_eq!(Ok(Locale::English), "EN".parse());
        assert!("fr".parse::<Locale>().is_err());
    }
}
