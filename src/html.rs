//! html.rs
//!
//! HTML fragments for the calendar page: result panels, the month grid with
//! its week-number column and moon legend, and the moon phase views.
//!
//! Everything here only builds strings. Where the fragments go, and when they
//! get rebuilt, is up to whoever embeds them.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::age::{calculate_age, date_difference};
use crate::calendar::{days_between, days_since, is_weekend, month_start, quarter, week_number};
use crate::format::{DateFormat, Locale, format_date, format_duration, month_name, weekday_name};
use crate::grid::weeks;
use crate::moon::{MoonPhaseRecord, main_phase_events, month_phases};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub panel: &'static str,
    pub ok: &'static str,
    pub error: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                muted: "#8b949e",
                panel: "#21262d",
                ok: "#3fb950",
                error: "#f85149",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#333333",
                muted: "#666666",
                panel: "#f8f9fa",
                ok: "#28a745",
                error: "#dc3545",
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}` (expected light or dark)")),
        }
    }
}

/// Which moon phase listing to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoonView {
    /// Principal phases only.
    #[default]
    Main,
    /// Every day of the month.
    Daily,
}

struct Labels {
    difference: &'static str,
    duration: &'static str,
    elapsed: &'static str,
    future: &'static str,
    remaining: &'static str,
    age: &'static str,
    days_lived: &'static str,
    days: &'static str,
    formatted: &'static str,
    details: &'static str,
    weekday: &'static str,
    weekend: &'static str,
    week_of_year: &'static str,
    quarter: &'static str,
    yes: &'static str,
    no: &'static str,
    week_column: &'static str,
    weekdays_short: [&'static str; 7],
    moon_legend: &'static str,
    main_phases: &'static str,
    daily_phases: &'static str,
    no_main_phases: &'static str,
}

static LABELS_EN: Labels = Labels {
    difference: "Difference",
    duration: "Duration",
    elapsed: "Days elapsed",
    future: "Future date",
    remaining: "Remaining",
    age: "Age",
    days_lived: "Total days lived",
    days: "days",
    formatted: "Formatted date",
    details: "Details",
    weekday: "Weekday",
    weekend: "Weekend",
    week_of_year: "Week of year",
    quarter: "Quarter",
    yes: "Yes",
    no: "No",
    week_column: "Wk",
    weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    moon_legend: "Moon phases",
    main_phases: "Main Moon Phases",
    daily_phases: "Daily Moon Phases",
    no_main_phases: "No main phase found in this month.",
};

static LABELS_PT: Labels = Labels {
    difference: "Diferença",
    duration: "Duração",
    elapsed: "Dias decorridos",
    future: "Data futura",
    remaining: "Faltam",
    age: "Idade",
    days_lived: "Total de dias vividos",
    days: "dias",
    formatted: "Data formatada",
    details: "Informações adicionais",
    weekday: "Dia da semana",
    weekend: "É final de semana",
    week_of_year: "Semana do ano",
    quarter: "Trimestre",
    yes: "Sim",
    no: "Não",
    week_column: "Sem",
    weekdays_short: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
    moon_legend: "Fases da Lua",
    main_phases: "Fases Principais da Lua",
    daily_phases: "Fases Diárias da Lua",
    no_main_phases: "Nenhuma fase principal encontrada neste mês.",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::English => &LABELS_EN,
        Locale::Portuguese => &LABELS_PT,
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn panel(body: &str, border: &str) -> String {
    format!(
        r#"<div class="result" style="border-left: 4px solid {border};">
{body}
</div>
"#
    )
}

/// Inline error panel, e.g. for a missing date.
pub fn render_error(message: &str, theme: Theme) -> String {
    panel(&escape_html(message), theme.colors().error)
}

pub fn render_difference(a: NaiveDate, b: NaiveDate, locale: Locale, theme: Theme) -> String {
    let l = labels(locale);
    let days = days_between(a, b);
    let duration = date_difference(a, b).compact(locale);

    panel(
        &format!(
            "<strong>{}:</strong> {days} {}<br>\n<strong>{}:</strong> {}",
            l.difference,
            l.days,
            l.duration,
            escape_html(&duration)
        ),
        theme.colors().ok,
    )
}

/// Days from `date` up to `now`, or remaining days when `date` is ahead.
pub fn render_days_since(date: NaiveDate, now: NaiveDateTime, locale: Locale, theme: Theme) -> String {
    let l = labels(locale);
    let days = days_since(date, now);
    let duration = escape_html(&format_duration(days.abs(), locale));

    let body = if days >= 0 {
        format!(
            "<strong>{}:</strong> {days} {}<br>\n<strong>{}:</strong> {duration}",
            l.elapsed, l.days, l.duration
        )
    } else {
        format!(
            "<strong>{}:</strong> {} {}<br>\n<strong>{}:</strong> {duration}",
            l.future,
            days.abs(),
            l.days,
            l.remaining
        )
    };
    panel(&body, theme.colors().ok)
}

pub fn render_age(birth: NaiveDate, now: NaiveDateTime, locale: Locale, theme: Theme) -> String {
    let l = labels(locale);
    let age = calculate_age(birth, now.date());
    let lived = days_since(birth, now);

    panel(
        &format!(
            "<strong>{}:</strong> {}<br>\n<strong>{}:</strong> {lived} {}",
            l.age,
            escape_html(&age.describe(locale)),
            l.days_lived,
            l.days
        ),
        theme.colors().ok,
    )
}

pub fn render_format(date: NaiveDate, format: DateFormat, locale: Locale, theme: Theme) -> String {
    let l = labels(locale);
    let formatted = format_date(date, format, locale);
    let weekend = if is_weekend(date) { l.yes } else { l.no };

    panel(
        &format!(
            "<strong>{}:</strong> {}<br>\n<strong>{}:</strong><br>\n\
             • {}: {}<br>\n• {}: {weekend}<br>\n• {}: {}<br>\n• {}: {}",
            l.formatted,
            escape_html(&formatted),
            l.details,
            l.weekday,
            weekday_name(date, locale),
            l.weekend,
            l.week_of_year,
            week_number(date),
            l.quarter,
            quarter(date)
        ),
        theme.colors().ok,
    )
}

fn title(text: &str, colors: &ThemeColors) -> String {
    format!(
        r#"<div style="grid-column: 1 / -1; text-align: center; font-size: 1.2rem; font-weight: bold; margin-bottom: 10px; color: {};">{}</div>
"#,
        colors.text,
        escape_html(text)
    )
}

/// Month grid with a leading week-number column and the month's main moon
/// phases marked on their days.
pub fn render_calendar(
    year: i32,
    month0: i32,
    today: NaiveDate,
    locale: Locale,
    theme: Theme,
) -> String {
    let l = labels(locale);
    let colors = theme.colors();
    let Some(first) = month_start(year, month0) else {
        return String::new();
    };
    let events = main_phase_events(year, month0);

    let mut out = String::new();
    out.push_str(&format!(
        r#"<div class="calendar" style="background: {};">
"#,
        colors.bg
    ));
    out.push_str(&title(
        &format!("{} {}", month_name(first.month0(), locale), first.year()),
        &colors,
    ));

    out.push_str(&format!(
        "<div class=\"calendar-header\">{}</div>\n",
        l.week_column
    ));
    for name in l.weekdays_short {
        out.push_str(&format!("<div class=\"calendar-header\">{name}</div>\n"));
    }

    for week in weeks(year, month0, today) {
        out.push_str(&format!(
            "<div class=\"calendar-week-number\">{}</div>\n",
            week.number
        ));
        for cell in &week.days {
            let mut class = String::from("calendar-day");
            if !cell.is_current_month {
                class.push_str(" other-month");
            }
            if cell.is_today {
                class.push_str(" today");
            }

            let event = cell
                .is_current_month
                .then(|| events.iter().find(|e| e.date == cell.date))
                .flatten();
            match event {
                Some(e) => out.push_str(&format!(
                    r#"<div class="{class}"><div class="day-number">{}</div><div class="moon-icon-small" title="{}">{}</div></div>
"#,
                    cell.day,
                    escape_html(e.phase.label(locale)),
                    e.icon
                )),
                None => out.push_str(&format!("<div class=\"{class}\">{}</div>\n", cell.day)),
            }
        }
    }

    if !events.is_empty() {
        let legend = events
            .iter()
            .map(|e| format!("{} {} - {}", e.icon, e.day, escape_html(e.phase.label(locale))))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!(
            r#"<div class="moon-legend" style="grid-column: 1 / -1; background: {}; color: {};"><strong>{}:</strong><br>
{legend}</div>
"#,
            colors.panel, colors.muted, l.moon_legend
        ));
    }

    out.push_str("</div>\n");
    out
}

pub fn render_moon_phases(
    year: i32,
    month0: i32,
    view: MoonView,
    locale: Locale,
    theme: Theme,
) -> String {
    let l = labels(locale);
    let colors = theme.colors();
    let Some(first) = month_start(year, month0) else {
        return String::new();
    };
    let month = month_name(first.month0(), locale);

    match view {
        MoonView::Main => {
            let events = main_phase_events(year, month0);
            if events.is_empty() {
                return format!(
                    "<p style=\"text-align: center; color: {};\">{}</p>\n",
                    colors.muted, l.no_main_phases
                );
            }
            let mut out = title(&format!("{} - {month} {}", l.main_phases, first.year()), &colors);
            out.push_str("<div class=\"moon-phases-grid\">\n");
            for e in &events {
                out.push_str(&main_card(e, locale));
            }
            out.push_str("</div>\n");
            out
        }
        MoonView::Daily => {
            let mut out = title(&format!("{} - {month} {}", l.daily_phases, first.year()), &colors);
            out.push_str("<div class=\"moon-phases-list\">\n");
            for r in month_phases(year, month0) {
                out.push_str(&daily_item(&r, locale));
            }
            out.push_str("</div>\n");
            out
        }
    }
}

fn main_card(record: &MoonPhaseRecord, locale: Locale) -> String {
    format!(
        r#"<div class="moon-phase-card main-phase"><span class="moon-icon">{}</span><div class="moon-phase-name">{}</div><div class="moon-phase-date">{}</div></div>
"#,
        record.icon,
        escape_html(record.phase.label(locale)),
        record.formatted_date
    )
}

fn daily_item(record: &MoonPhaseRecord, locale: Locale) -> String {
    let label = escape_html(record.phase.label(locale));
    format!(
        r#"<div class="moon-day-item" title="{label} - {}"><div class="moon-day-number">{}</div><span class="moon-day-icon">{}</span><div class="moon-day-phase">{label}</div></div>
"#,
        record.formatted_date, record.day, record.icon
    )
}
