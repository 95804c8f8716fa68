use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d";

/// Formats the current time and date for the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    time_format: String,
    date_format: String,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT, DEFAULT_DATE_FORMAT)
    }
}

impl Clock {
    pub fn new(time_format: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            time_format: time_format.into(),
            date_format: date_format.into(),
        }
    }

    /// Returns true if `format` is a strftime string chrono can render.
    ///
    /// Some specifiers parse but only work for parsing (`%#z`), so the format is rendered once.
    pub fn is_valid_format(format: &str) -> bool {
        render(&Local::now(), format).is_some()
    }

    /// Returns `(time, date)` for `now`.
    ///
    /// A format that fails to render falls back to the default one.
    pub fn format<Tz>(&self, now: &DateTime<Tz>) -> (String, String)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        (
            render_or_default(now, &self.time_format, DEFAULT_TIME_FORMAT),
            render_or_default(now, &self.date_format, DEFAULT_DATE_FORMAT),
        )
    }

    /// Returns `(time, date)` for the local wall clock.
    pub fn now(&self) -> (String, String) {
        self.format(&Local::now())
    }
}

fn render<Tz>(now: &DateTime<Tz>, format: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", now.format(format)).ok()?;
    Some(out)
}

fn render_or_default<Tz>(now: &DateTime<Tz>, format: &str, default: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render(now, format)
        .or_else(|| render(now, default))
        .unwrap_or_default()
}
