//! Wall-clock snapshots for pattern rendering.
//!
//! A [`Timestamp`] is captured once per rendered message and exposes the
//! named, preformatted fields the pattern tokens substitute. It is never
//! retained past a single render.

use chrono::{DateTime, Datelike, Local, Timelike};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
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

/// A snapshot of the local wall clock, broken into the fields the
/// [pattern renderer] substitutes.
///
/// [pattern renderer]: crate::pattern::render
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    inner: DateTime<Local>,
}

impl Timestamp {
    /// Captures the current local time.
    pub fn now() -> Self {
        Timestamp {
            inner: Local::now(),
        }
    }

    /// Wraps an already-captured point in time.
    ///
    /// Useful for rendering patterns against a fixed clock, in tests for
    /// example.
    pub fn from_datetime(inner: DateTime<Local>) -> Self {
        Timestamp { inner }
    }

    /// Full weekday name, `"Sunday"` through `"Saturday"`.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.inner.weekday().num_days_from_sunday() as usize]
    }

    /// Full month name, `"January"` through `"December"`.
    pub fn month_name(&self) -> &'static str {
        MONTHS[self.inner.month0() as usize]
    }

    /// Last two digits of the year, without padding.
    pub fn year_2_digits(&self) -> String {
        (self.inner.year() % 100).to_string()
    }

    /// The four-digit year.
    pub fn year_4_digits(&self) -> String {
        self.inner.year().to_string()
    }

    /// Full representation: `"Weekday Month D YYYY HH:MM:SS"`.
    pub fn date_time(&self) -> String {
        format!(
            "{} {} {} {} {:02}:{:02}:{:02}",
            self.weekday_name(),
            self.month_name(),
            self.inner.day(),
            self.inner.year(),
            self.inner.hour(),
            self.inner.minute(),
            self.inner.second(),
        )
    }

    /// Short date in `MM/DD/YY` form.
    pub fn short_date(&self) -> String {
        format!(
            "{:02}/{:02}/{:02}",
            self.inner.month(),
            self.inner.day(),
            self.inner.year() % 100,
        )
    }

    /// Month number, zero-padded to two digits.
    pub fn month(&self) -> String {
        format!("{:02}", self.inner.month())
    }

    /// Day of the month, zero-padded to two digits.
    pub fn day_of_month(&self) -> String {
        format!("{:02}", self.inner.day())
    }

    /// Hour on the 24-hour clock, zero-padded to two digits.
    pub fn hours_24(&self) -> String {
        format!("{:02}", self.inner.hour())
    }

    /// Hour on the 12-hour clock, zero-padded to two digits.
    ///
    /// Midnight and noon both read `12`.
    pub fn hours_12(&self) -> String {
        format!("{:02}", fold_12(self.inner.hour()))
    }

    /// Minute, zero-padded to two digits.
    pub fn minutes(&self) -> String {
        format!("{:02}", self.inner.minute())
    }

    /// Second, zero-padded to two digits.
    pub fn seconds(&self) -> String {
        format!("{:02}", self.inner.second())
    }

    /// `"AM"` before noon, `"PM"` from noon on.
    pub fn am_pm(&self) -> &'static str {
        if self.inner.hour() < 12 {
            "AM"
        } else {
            "PM"
        }
    }

    /// 12-hour clock: `"hh:mm:ss AM"`.
    pub fn clock_12_hour(&self) -> String {
        format!(
            "{:02}:{:02}:{:02} {}",
            fold_12(self.inner.hour()),
            self.inner.minute(),
            self.inner.second(),
            self.am_pm(),
        )
    }

    /// 24-hour clock without seconds: `"HH:MM"`.
    pub fn hours_minutes(&self) -> String {
        format!("{:02}:{:02}", self.inner.hour(), self.inner.minute())
    }

    /// ISO 8601 time of day: `"HH:MM:SS"`.
    pub fn iso_time(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.inner.hour(),
            self.inner.minute(),
            self.inner.second(),
        )
    }
}

/// Folds a 24-hour clock hour onto the 12-hour clock.
fn fold_12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        folded => folded,
    }
}
