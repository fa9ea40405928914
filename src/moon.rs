//! moon.rs
//!
//! Lunar phase estimates for calendar display.
//!
//! The phase is a straight linear interpolation from a reference new moon
//! (2000-01-06 18:00 UT, Julian day 2451549.5) with the mean synodic month as
//! the period. It drifts from the true phase by up to a day or so; the
//! formula is fixed and must not be refined.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{days_in_month, month_start};
use crate::format::{DateFormat, Locale, format_date};

/// Julian day of the reference new moon.
pub const NEW_MOON_EPOCH: f64 = 2451549.5;

/// Mean length of a lunation, in days.
pub const SYNODIC_MONTH: f64 = 29.53058867;

/// The eight display phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::New,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::Full,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    /// Classifies a phase fraction in `[0, 1)`.
    ///
    /// Bins are 1/8 wide and centred on the phase points, so New covers both
    /// `[0, 1/16)` and `[15/16, 1)`.
    pub fn from_fraction(fraction: f64) -> Self {
        match fraction {
            f if f < 0.0625 => PhaseName::New,
            f if f < 0.1875 => PhaseName::WaxingCrescent,
            f if f < 0.3125 => PhaseName::FirstQuarter,
            f if f < 0.4375 => PhaseName::WaxingGibbous,
            f if f < 0.5625 => PhaseName::Full,
            f if f < 0.6875 => PhaseName::WaningGibbous,
            f if f < 0.8125 => PhaseName::LastQuarter,
            f if f < 0.9375 => PhaseName::WaningCrescent,
            _ => PhaseName::New,
        }
    }

    /// The phase that follows this one.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// New, first quarter, full and last quarter.
    pub fn is_principal(self) -> bool {
        matches!(
            self,
            PhaseName::New | PhaseName::FirstQuarter | PhaseName::Full | PhaseName::LastQuarter
        )
    }

    pub fn icon(self) -> &'static str {
        match self {
            PhaseName::New => "🌑",
            PhaseName::WaxingCrescent => "🌒",
            PhaseName::FirstQuarter => "🌓",
            PhaseName::WaxingGibbous => "🌔",
            PhaseName::Full => "🌕",
            PhaseName::WaningGibbous => "🌖",
            PhaseName::LastQuarter => "🌗",
            PhaseName::WaningCrescent => "🌘",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                PhaseName::New => "New Moon",
                PhaseName::WaxingCrescent => "Waxing Crescent",
                PhaseName::FirstQuarter => "First Quarter",
                PhaseName::WaxingGibbous => "Waxing Gibbous",
                PhaseName::Full => "Full Moon",
                PhaseName::WaningGibbous => "Waning Gibbous",
                PhaseName::LastQuarter => "Last Quarter",
                PhaseName::WaningCrescent => "Waning Crescent",
            },
            Locale::Portuguese => match self {
                PhaseName::New => "Nova",
                PhaseName::WaxingCrescent => "Crescente",
                PhaseName::FirstQuarter => "Quarto Crescente",
                PhaseName::WaxingGibbous => "Gibosa Crescente",
                PhaseName::Full => "Cheia",
                PhaseName::WaningGibbous => "Gibosa Minguante",
                PhaseName::LastQuarter => "Quarto Minguante",
                PhaseName::WaningCrescent => "Minguante",
            },
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}

impl FromStr for PhaseName {
    type Err = String;

    /// Accepts the English or Portuguese label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                [Locale::English, Locale::Portuguese]
                    .iter()
                    .any(|l| p.label(*l).eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| format!("unknown moon phase `{s}`"))
    }
}

/// Icon for a phase label; unknown labels get the new moon.
pub fn moon_phase_icon(label: &str) -> &'static str {
    label
        .parse::<PhaseName>()
        .map_or(PhaseName::New.icon(), PhaseName::icon)
}

/// One day of a month with its estimated phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonPhaseRecord {
    pub date: NaiveDate,
    pub day: u32,
    pub phase: PhaseName,
    pub icon: &'static str,
    /// `dd/mm/yyyy`
    pub formatted_date: String,
}

impl MoonPhaseRecord {
    pub fn new(date: NaiveDate) -> Self {
        let phase = moon_phase(date);
        Self {
            date,
            day: date.day(),
            phase,
            icon: phase.icon(),
            formatted_date: format_date(date, DateFormat::DayMonthYear, Locale::English),
        }
    }
}

/// Gregorian date to Julian day number (Fliegel–Van Flandern).
pub fn julian_day(date: NaiveDate) -> i64 {
    let (year, month, day) = (
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    );
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

/// Position within the lunation, in `[0, 1)`; 0 is new, 0.5 is full.
pub fn phase_fraction(date: NaiveDate) -> f64 {
    let elapsed = julian_day(date) as f64 - NEW_MOON_EPOCH;
    // `%` truncates toward zero, so dates before the epoch come out negative.
    let phase = (elapsed % SYNODIC_MONTH) / SYNODIC_MONTH;
    if phase < 0.0 { phase + 1.0 } else { phase }
}

pub fn moon_phase(date: NaiveDate) -> PhaseName {
    PhaseName::from_fraction(phase_fraction(date))
}

/// Phase of every day of a zero-based month, in day order.
pub fn month_phases(year: i32, month0: i32) -> Vec<MoonPhaseRecord> {
    let Some(first) = month_start(year, month0) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take(days_in_month(year, month0) as usize)
        .map(MoonPhaseRecord::new)
        .collect()
}

/// Principal phases of a month, one entry per plateau.
pub fn main_phase_events(year: i32, month0: i32) -> Vec<MoonPhaseRecord> {
    let events = select_main_phases(month_phases(year, month0));
    debug!(year, month0, events = events.len(), "main moon phases");
    events
}

/// Keeps records whose phase is principal and differs from the last one kept.
///
/// Only kept records update the comparison, so intermediate phases between
/// two days of the same principal phase do not split the plateau.
pub fn select_main_phases(records: impl IntoIterator<Item = MoonPhaseRecord>) -> Vec<MoonPhaseRecord> {
    let mut last: Option<PhaseName> = None;
    records
        .into_iter()
        .filter(|r| {
            if r.phase.is_principal() && last != Some(r.phase) {
                last = Some(r.phase);
                true
            } else {
                false
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

    fn record(day: u32, phase: PhaseName) -> MoonPhaseRecord {
        let date = ymd(2024, 3, day);
        MoonPhaseRecord {
            date,
            day,
            phase,
            icon: phase.icon(),
            formatted_date: format_date(date, DateFormat::DayMonthYear, Locale::English),
        }
    }

    #[test]
    fn julian_day_numbers() {
        assert_eq!(2451545, julian_day(ymd(2000, 1, 1)));
        assert_eq!(2440588, julian_day(ymd(1970, 1, 1)));
        assert_eq!(2460311, julian_day(ymd(2024, 1, 1)));
        assert_eq!(2459466, julian_day(ymd(2021, 9, 8)));
    }

    #[test]
    fn classification_edges() {
        use PhaseName::*;
        for (f, expected) in [
            (0.0, New),
            (0.0624, New),
            (0.0625, WaxingCrescent),
            (0.1875, FirstQuarter),
            (0.3125, WaxingGibbous),
            (0.4375, Full),
            (0.5, Full),
            (0.5625, WaningGibbous),
            (0.6875, LastQuarter),
            (0.8125, WaningCrescent),
            (0.9374, WaningCrescent),
            (0.9375, New),
            (0.9999, New),
        ] {
            assert_eq!(expected, PhaseName::from_fraction(f), "{f}");
        }
    }

    #[test]
    fn phases_near_epoch() {
        // 2000-01-06 is half a day after the epoch in this integer-day scheme.
        assert_eq!(PhaseName::New, moon_phase(ymd(2000, 1, 6)));
        assert_eq!(PhaseName::FirstQuarter, moon_phase(ymd(2000, 1, 12)));
        assert_eq!(PhaseName::Full, moon_phase(ymd(2000, 1, 20)));
        assert_eq!(PhaseName::LastQuarter, moon_phase(ymd(2000, 1, 27)));
    }

    #[test]
    fn dates_before_epoch_are_normalised() {
        let f = phase_fraction(ymd(1999, 12, 6));
        assert!((0.0..1.0).contains(&f));
        assert!((f - 0.9672).abs() < 1e-3, "{f}");
        assert_eq!(PhaseName::New, moon_phase(ymd(1999, 12, 6)));
        assert_eq!(PhaseName::LastQuarter, moon_phase(ymd(1999, 12, 1)));
    }

    #[test]
    fn cycle_order() {
        let mut p = PhaseName::New;
        for expected in PhaseName::ALL.iter().skip(1) {
            p = p.next();
            assert_eq!(*expected, p);
        }
        assert_eq!(PhaseName::New, p.next());
    }

    #[test]
    fn icons_are_distinct() {
        let mut icons: Vec<_> = PhaseName::ALL.iter().map(|p| p.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(8, icons.len());
        assert_eq!("🌕", PhaseName::Full.icon());
    }

    #[test]
    fn icon_by_label() {
        assert_eq!("🌕", moon_phase_icon("Cheia"));
        assert_eq!("🌓", moon_phase_icon("first quarter"));
        assert_eq!("🌘", moon_phase_icon("Minguante"));
        assert_eq!("🌑", moon_phase_icon("Desconhecida"));
        assert_eq!("🌑", moon_phase_icon(""));
    }

    #[test]
    fn labels_parse_back() {
        for p in PhaseName::ALL {
            assert_eq!(Ok(p), p.label(Locale::English).parse());
            assert_eq!(Ok(p), p.label(Locale::Portuguese).parse());
        }
    }

    #[test]
    fn march_2024_daily() {
        let phases = month_phases(2024, 2);
        assert_eq!(31, phases.len());
        for (i, r) in phases.iter().enumerate() {
            assert_eq!(i as u32 + 1, r.day);
            assert_eq!(r.phase.icon(), r.icon);
        }
        assert_eq!("01/03/2024", phases[0].formatted_date);
        assert_eq!(PhaseName::LastQuarter, phases[0].phase);
        assert_eq!(PhaseName::Full, phases[23].phase);
    }

    #[test]
    fn march_2024_main_events() {
        let events: Vec<_> = main_phase_events(2024, 2)
            .into_iter()
            .map(|r| (r.day, r.phase))
            .collect();
        assert_eq!(
            vec![
                (1, PhaseName::LastQuarter),
                (8, PhaseName::New),
                (15, PhaseName::FirstQuarter),
                (23, PhaseName::Full),
                (30, PhaseName::LastQuarter),
            ],
            events
        );
    }

    #[test]
    fn plateaus_collapse_to_first_day() {
        use PhaseName::*;
        let kept: Vec<_> = select_main_phases(vec![
            record(1, Full),
            record(2, Full),
            record(3, WaningGibbous),
            record(4, Full),
            record(5, LastQuarter),
            record(6, LastQuarter),
            record(7, WaningCrescent),
        ])
        .into_iter()
        .map(|r| r.day)
        .collect();
        // day 4 repeats the last kept phase despite the gap
        assert_eq!(vec![1, 5], kept);
    }

    #[test]
    fn out_of_range_month_is_empty() {
        assert!(month_phases(i32::MAX, 0).is_empty());
        assert!(main_phase_events(i32::MAX, 0).is_empty());
    }
}
