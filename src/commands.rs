use anyhow::{Context, Result};
use chrono::NaiveDate;
use datekit::age::{calculate_age, date_difference};
use datekit::calendar::{
    days_between, days_since, is_weekend, parse_date, parse_month, quarter, week_number,
};
use datekit::format::{DateFormat, format_date, format_duration, month_name, weekday_name};
use datekit::grid::weeks;
use datekit::html::{self, MoonView};
use datekit::moon::{main_phase_events, month_phases};
use serde_json::json;
use tracing::debug;

use crate::config::{Output, Settings};

fn date_arg(raw: &str, what: &str) -> Result<NaiveDate> {
    parse_date(raw).with_context(|| format!("{what} is not a valid YYYY-MM-DD date: {raw:?}"))
}

fn month_arg(raw: &str) -> Result<(i32, i32)> {
    let (year, month0) =
        parse_month(raw).with_context(|| format!("month is not a valid YYYY-MM value: {raw:?}"))?;
    Ok((year, month0 as i32))
}

fn pretty(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result as JSON")
}

pub fn difference(first: &str, second: &str, cfg: &Settings) -> Result<String> {
    let a = date_arg(first, "first date")?;
    let b = date_arg(second, "second date")?;
    let days = days_between(a, b);
    let span = date_difference(a, b);
    debug!(%a, %b, days, "difference");

    match cfg.output {
        Output::Json => pretty(&json!({ "days": days, "span": span })),
        Output::Html => Ok(html::render_difference(a, b, cfg.locale, cfg.theme)),
        Output::Text => Ok(format!("{days}\n{}\n", span.compact(cfg.locale))),
    }
}

pub fn since(raw: &str, cfg: &Settings) -> Result<String> {
    let date = date_arg(raw, "date")?;
    let days = days_since(date, cfg.now);
    let duration = format_duration(days.abs(), cfg.locale);

    match cfg.output {
        Output::Json => pretty(&json!({ "days": days, "duration": duration })),
        Output::Html => Ok(html::render_days_since(date, cfg.now, cfg.locale, cfg.theme)),
        Output::Text => Ok(format!("{days}\n{duration}\n")),
    }
}

pub fn age(raw: &str, cfg: &Settings) -> Result<String> {
    let birth = date_arg(raw, "birth date")?;
    let age = calculate_age(birth, cfg.now.date());
    let lived = days_since(birth, cfg.now);

    match cfg.output {
        Output::Json => pretty(&json!({ "age": age, "days_lived": lived })),
        Output::Html => Ok(html::render_age(birth, cfg.now, cfg.locale, cfg.theme)),
        Output::Text => Ok(format!("{}\n{lived}\n", age.describe(cfg.locale))),
    }
}

pub fn format(raw: &str, layout: &str, cfg: &Settings) -> Result<String> {
    let date = date_arg(raw, "date")?;
    let layout = DateFormat::from(layout);
    let formatted = format_date(date, layout, cfg.locale);

    match cfg.output {
        Output::Json => pretty(&json!({
            "formatted": formatted,
            "weekday": weekday_name(date, cfg.locale),
            "weekend": is_weekend(date),
            "week": week_number(date),
            "quarter": quarter(date),
        })),
        Output::Html => Ok(html::render_format(date, layout, cfg.locale, cfg.theme)),
        Output::Text => Ok(format!("{formatted}\n")),
    }
}

pub fn calendar(raw: &str, cfg: &Settings) -> Result<String> {
    let (year, month0) = month_arg(raw)?;
    let today = cfg.now.date();

    match cfg.output {
        Output::Json => pretty(&json!({
            "weeks": weeks(year, month0, today),
            "moon": main_phase_events(year, month0),
        })),
        Output::Html => Ok(html::render_calendar(year, month0, today, cfg.locale, cfg.theme)),
        Output::Text => {
            let mut out = format!("{} {year}\n", month_name(month0 as u32, cfg.locale));
            for week in weeks(year, month0, today) {
                out.push_str(&format!("{:>2} |", week.number));
                for cell in &week.days {
                    let mark = match (cell.is_today, cell.is_current_month) {
                        (true, _) => '*',
                        (false, true) => ' ',
                        (false, false) => '.',
                    };
                    out.push_str(&format!(" {:>2}{mark}", cell.day));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn moon(raw: &str, daily: bool, cfg: &Settings) -> Result<String> {
    let (year, month0) = month_arg(raw)?;
    let records = if daily {
        month_phases(year, month0)
    } else {
        main_phase_events(year, month0)
    };

    match cfg.output {
        Output::Json => pretty(&serde_json::to_value(&records)?),
        Output::Html => {
            let view = if daily { MoonView::Daily } else { MoonView::Main };
            Ok(html::render_moon_phases(year, month0, view, cfg.locale, cfg.theme))
        }
        Output::Text => Ok(records
            .iter()
            .map(|r| format!("{} {} {}\n", r.formatted_date, r.icon, r.phase.label(cfg.locale)))
            .collect()),
    }
}
