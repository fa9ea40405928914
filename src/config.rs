//! Run settings resolved from command-line flags and their `DATEKIT_*`
//! environment fallbacks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use datekit::Locale;
use datekit::calendar::parse_date;
use datekit::html::Theme;
use tracing::info;

use crate::cli::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
    Html,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Reference instant for every "today"-relative calculation.
    pub now: NaiveDateTime,
    pub locale: Locale,
    pub theme: Theme,
    pub output: Output,
    pub path: Option<PathBuf>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let now = match cli.today.as_deref() {
            Some(raw) => parse_date(raw)
                .with_context(|| format!("--today / DATEKIT_TODAY is not a YYYY-MM-DD date: {raw:?}"))?
                .and_time(NaiveTime::MIN),
            None => Local::now().naive_local(),
        };

        let output = if cli.json {
            Output::Json
        } else if cli.html {
            Output::Html
        } else {
            Output::Text
        };

        info!(%now, locale = %cli.locale, ?output, "settings resolved");
        Ok(Self {
            now,
            locale: cli.locale,
            theme: cli.theme,
            output,
            path: cli.output.clone(),
        })
    }
}
