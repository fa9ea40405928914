//! Date arithmetic, month grids and moon phases for calendar pages.
//!
//! Everything is computed from naive calendar dates. Functions that depend on
//! "today" take it as an argument, so the same inputs always produce the same
//! output.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use datekit::{calendar, grid, moon};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//!
//! let cells = grid::generate_grid(2024, 2, today);
//! assert_eq!(0, cells.len() % 7);
//! assert_eq!(31, cells.iter().filter(|c| c.is_current_month).count());
//!
//! let start = calendar::parse_date("2024-01-01").unwrap();
//! assert_eq!(1, calendar::week_number(start));
//!
//! let events = moon::main_phase_events(2024, 2);
//! assert!(events.iter().all(|e| e.phase.is_principal()));
//! ```
//!
//! Ages and durations:
//!
//! ```
//! use chrono::NaiveDate;
//! use datekit::age::calculate_age;
//! use datekit::format::{Locale, format_duration};
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert_eq!(34, calculate_age(birth, today).years);
//!
//! assert_eq!("1 year, 1 month, 5 days", format_duration(400, Locale::English));
//! ```

pub mod age;
pub mod calendar;
pub mod format;
pub mod grid;
pub mod html;
pub mod moon;

pub use age::AgeDuration;
pub use format::{DateFormat, Locale};
pub use grid::{CalendarDay, Week};
pub use moon::{MoonPhaseRecord, PhaseName};
