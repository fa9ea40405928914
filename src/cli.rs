use std::path::PathBuf;

use clap::{Parser, Subcommand};
use datekit::Locale;
use datekit::html::Theme;

/// Date differences, ages, month calendars and moon phases.
#[derive(Parser)]
#[command(name = "datekit", version, about = "Date and calendar toolkit")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat this date (YYYY-MM-DD) as today instead of reading the clock.
    #[arg(long, global = true, env = "DATEKIT_TODAY")]
    pub today: Option<String>,

    /// Language for generated text (en, pt).
    #[arg(long, global = true, env = "DATEKIT_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Colour theme for HTML output (light, dark).
    #[arg(long, global = true, env = "DATEKIT_THEME", default_value = "light")]
    pub theme: Theme,

    /// Emit JSON records instead of text.
    #[arg(long, global = true, conflicts_with = "html")]
    pub json: bool,

    /// Emit an HTML fragment instead of text.
    #[arg(long, global = true)]
    pub html: bool,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Days and calendar span between two dates.
    Difference {
        /// First date (YYYY-MM-DD).
        first: String,
        /// Second date (YYYY-MM-DD).
        second: String,
    },
    /// Days elapsed since a date, negative for future dates.
    Since {
        /// Date (YYYY-MM-DD).
        date: String,
    },
    /// Age in years, months and days.
    Age {
        /// Birth date (YYYY-MM-DD).
        birth: String,
    },
    /// Format a date and show its weekday, week and quarter.
    Format {
        /// Date (YYYY-MM-DD).
        date: String,
        /// Layout: dd/mm/yyyy, mm-dd-yyyy, yyyy-mm-dd or extenso.
        #[arg(short, long, default_value = "dd/mm/yyyy")]
        format: String,
    },
    /// Month calendar grid with week numbers and main moon phases.
    Calendar {
        /// Month (YYYY-MM).
        month: String,
    },
    /// Moon phases of a month.
    Moon {
        /// Month (YYYY-MM).
        month: String,
        /// List every day instead of the main phases only.
        #[arg(long)]
        daily: bool,
    },
}
