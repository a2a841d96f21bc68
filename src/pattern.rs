//! Pattern expansion for rendered log lines.
//!
//! A pattern is literal text interleaved with two-character `%` tokens.
//! Expanding it against a message, a level, a logger name, and a
//! [`Timestamp`] yields the final line handed to the sinks:
//!
//! ```
//! use timber::pattern::render;
//! use timber::{Level, Timestamp};
//!
//! let line = render("[%L] %N: %V%n", Level::Info, "app", "hi", &Timestamp::now());
//! assert_eq!(line, "[info] app: hi\n");
//! ```
//!
//! # Tokens
//!
//! | Token | Substitution                                  |
//! |-------|-----------------------------------------------|
//! | `%V`  | the formatted message                         |
//! | `%N`  | the logger name                               |
//! | `%L`  | the level name                                |
//! | `%A`  | full weekday name                             |
//! | `%B`  | full month name                               |
//! | `%C`  | two-digit year                                |
//! | `%Y`  | four-digit year                               |
//! | `%R`  | `Weekday Month D YYYY HH:MM:SS`               |
//! | `%D`  | `MM/DD/YY`                                    |
//! | `%m`  | month number                                  |
//! | `%d`  | day of month                                  |
//! | `%H`  | hour, 24-hour clock                           |
//! | `%h`  | hour, 12-hour clock                           |
//! | `%M`  | minute                                        |
//! | `%S`  | second                                        |
//! | `%F`  | `AM` or `PM`                                  |
//! | `%x`  | `hh:mm:ss AM`                                 |
//! | `%X`  | `HH:MM`                                       |
//! | `%T`  | `HH:MM:SS`                                    |
//! | `%%`  | a literal `%`                                 |
//! | `%n`  | a newline                                     |
//!
//! Anything else passes through unchanged: an unrecognized token keeps its
//! two characters, and a `%` at the end of the pattern stays literal.

use crate::level::Level;
use crate::timestamp::Timestamp;

/// Expands `pattern` into the final log line.
///
/// Each token is rendered exactly once; substituted text is never
/// rescanned, so a message containing `%V` cannot expand itself.
pub fn render(
    pattern: &str,
    level: Level,
    name: &str,
    message: &str,
    timestamp: &Timestamp,
) -> String {
    let mut out = String::with_capacity(pattern.len() + message.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let token = match chars.next() {
            Some(token) => token,
            None => {
                // a trailing '%' is literal
                out.push('%');
                break;
            }
        };

        match token {
            'V' => out.push_str(message),
            'N' => out.push_str(name),
            'L' => out.push_str(level.as_str()),
            'A' => out.push_str(timestamp.weekday_name()),
            'B' => out.push_str(timestamp.month_name()),
            'C' => out.push_str(&timestamp.year_2_digits()),
            'Y' => out.push_str(&timestamp.year_4_digits()),
            'R' => out.push_str(&timestamp.date_time()),
            'D' => out.push_str(&timestamp.short_date()),
            'm' => out.push_str(&timestamp.month()),
            'd' => out.push_str(&timestamp.day_of_month()),
            'H' => out.push_str(&timestamp.hours_24()),
            'h' => out.push_str(&timestamp.hours_12()),
            'M' => out.push_str(&timestamp.minutes()),
            'S' => out.push_str(&timestamp.seconds()),
            'F' => out.push_str(timestamp.am_pm()),
            'x' => out.push_str(&timestamp.clock_12_hour()),
            'X' => out.push_str(&timestamp.hours_minutes()),
            'T' => out.push_str(&timestamp.iso_time()),
            '%' => out.push('%'),
            'n' => out.push('\n'),
            unknown => {
                out.push('%');
                out.push(unknown);
            }
        }
    }

    out
}
