//! Fixed-locale (`en-US`) display formatting for numbers, currency, and dates.
//!
//! DESIGN
//! ======
//! These helpers run during server rendering and again after hydration, so
//! they are pure functions rather than calls into the browser's own locale
//! primitives: both render passes must produce identical text or hydration
//! would observe a mismatched DOM.

use chrono::{DateTime, Datelike, Timelike, Utc};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_LONG: [&str; 12] = [
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

/// Parses a string as a float the way lenient form fields expect: the longest
/// leading numeric prefix wins (`"12.5 bags"` is 12.5), anything without a
/// leading number is NaN.
#[must_use]
pub fn parse_decimal(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if seen_digit || frac > end + 1 {
            seen_digit = seen_digit || frac > end + 1;
            end = frac;
        }
    }
    if seen_digit && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }

    if !seen_digit {
        return f64::NAN;
    }
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Formats a value with a fixed number of decimal places; NaN renders as
/// `"NaN"` per standard float-to-string semantics. No thousands grouping.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Formats an amount under `en-US` conventions for the given ISO-4217 code.
/// Known codes render with their symbol; anything else falls back to the
/// code-literal rendering (`"XAU 1,234.56"`), matching what the browser's
/// locale formatter does for well-formed but unmapped codes.
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let magnitude = group_thousands(amount.abs(), 2);
    let sign = if amount < 0.0 { "-" } else { "" };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{magnitude}"),
        None => format!("{sign}{currency} {magnitude}"),
    }
}

/// [`format_currency`] with the default code.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format_currency(amount, "USD")
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        _ => None,
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let plain = format!("{value:.decimals$}");
    let (int_part, frac_part) = plain
        .split_once('.')
        .map_or((plain.as_str(), ""), |(int, frac)| (int, frac));
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        // NaN / infinities have nothing to group.
        return plain;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac_part}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStyle {
    Numeric,
    TwoDigit,
    Omit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Short,
    Long,
    Numeric,
    TwoDigit,
    Omit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStyle {
    Numeric,
    TwoDigit,
    Omit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    Numeric,
    TwoDigit,
    Omit,
}

/// Field-by-field date formatting options.
///
/// The defaults are the house rendering (`"Aug 22, 2026, 03:05 PM"`); callers
/// override individual fields with struct-update syntax, e.g.
/// `DateFormatOptions { month: MonthStyle::Long, ..DateFormatOptions::default() }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatOptions {
    pub year: YearStyle,
    pub month: MonthStyle,
    pub day: DayStyle,
    pub hour: ClockStyle,
    pub minute: ClockStyle,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self {
            year: YearStyle::Numeric,
            month: MonthStyle::Short,
            day: DayStyle::Numeric,
            hour: ClockStyle::TwoDigit,
            minute: ClockStyle::TwoDigit,
        }
    }
}

impl DateFormatOptions {
    /// Date fields only, time suppressed.
    #[must_use]
    pub fn date_only() -> Self {
        Self {
            hour: ClockStyle::Omit,
            minute: ClockStyle::Omit,
            ..Self::default()
        }
    }
}

/// Formats an instant under `en-US` conventions. Text months produce the
/// `"Aug 22, 2026"` ordering, numeric months the `"8/22/2026"` ordering; a
/// 12-hour clock with meridiem is appended when the hour is present.
#[must_use]
pub fn format_date(at: DateTime<Utc>, options: DateFormatOptions) -> String {
    let date = format_date_fields(at, options);
    let time = format_time_fields(at, options);
    match (date.is_empty(), time.is_empty()) {
        (false, false) => format!("{date}, {time}"),
        (true, false) => time,
        _ => date,
    }
}

fn format_date_fields(at: DateTime<Utc>, options: DateFormatOptions) -> String {
    let month_index = at.month0() as usize;
    let year = match options.year {
        YearStyle::Numeric => Some(format!("{}", at.year())),
        YearStyle::TwoDigit => Some(format!("{:02}", at.year() % 100)),
        YearStyle::Omit => None,
    };
    let day = match options.day {
        DayStyle::Numeric => Some(format!("{}", at.day())),
        DayStyle::TwoDigit => Some(format!("{:02}", at.day())),
        DayStyle::Omit => None,
    };

    match options.month {
        MonthStyle::Numeric | MonthStyle::TwoDigit => {
            let month = if options.month == MonthStyle::TwoDigit {
                format!("{:02}", at.month())
            } else {
                format!("{}", at.month())
            };
            let mut parts = vec![month];
            parts.extend(day);
            parts.extend(year);
            parts.join("/")
        }
        MonthStyle::Short | MonthStyle::Long => {
            let name = if options.month == MonthStyle::Long {
                MONTHS_LONG[month_index]
            } else {
                MONTHS_SHORT[month_index]
            };
            let month_day = match day {
                Some(day) => format!("{name} {day}"),
                None => name.to_owned(),
            };
            match year {
                Some(year) => format!("{month_day}, {year}"),
                None => month_day,
            }
        }
        MonthStyle::Omit => {
            let mut parts = Vec::new();
            parts.extend(day);
            parts.extend(year);
            parts.join(", ")
        }
    }
}

fn format_time_fields(at: DateTime<Utc>, options: DateFormatOptions) -> String {
    if options.hour == ClockStyle::Omit {
        return String::new();
    }

    let hour24 = at.hour();
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        other => other,
    };
    let hour = if options.hour == ClockStyle::TwoDigit {
        format!("{hour12:02}")
    } else {
        format!("{hour12}")
    };
    match options.minute {
        ClockStyle::Omit => format!("{hour} {meridiem}"),
        ClockStyle::TwoDigit => format!("{hour}:{:02} {meridiem}", at.minute()),
        ClockStyle::Numeric => format!("{hour}:{} {meridiem}", at.minute()),
    }
}
