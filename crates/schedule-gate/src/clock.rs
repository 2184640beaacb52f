//! Civil-time value types: weekday indices and clock times.
//!
//! Both types are plain stack values, constructed per evaluation and
//! discarded. Projections from an instant are pure functions of the
//! instant's calendar date and time of day — no system clock is read.
//!
//! The weekday convention is fixed crate-wide: **Monday = 0 … Sunday = 6**
//! (ISO-derived). Callers that number their weeks from Sunday must convert
//! before handing indices in; the crate does not support both conventions.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::{GateError, Result};

// ── Weekday ─────────────────────────────────────────────────────────────────

/// Day of the week under the Monday = 0 … Sunday = 6 convention.
///
/// The discriminants are the wire indices, so `Ord` compares week position
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Numeric index under the Monday = 0 convention.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Build a weekday from a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidWeekday`] for anything outside 0–6. The
    /// `-1` "unset" sentinel is rejected here too; the predicate layer
    /// screens for it first to report it as an unset field instead.
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Weekday::Monday),
            1 => Ok(Weekday::Tuesday),
            2 => Ok(Weekday::Wednesday),
            3 => Ok(Weekday::Thursday),
            4 => Ok(Weekday::Friday),
            5 => Ok(Weekday::Saturday),
            6 => Ok(Weekday::Sunday),
            other => Err(GateError::InvalidWeekday(format!(
                "index {other} is not in 0-6"
            ))),
        }
    }

    /// Project the weekday out of an instant's calendar date.
    pub fn from_instant(instant: &NaiveDateTime) -> Self {
        Self::from(instant.weekday())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

// ── ClockTime ───────────────────────────────────────────────────────────────

/// Time of day with second precision.
///
/// Totally ordered by (hour, minute, second) — the derived `Ord` relies on
/// the field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// Build a clock time from components.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidClockTime`] if any component is out of
    /// civil-time bounds (hour 0–23, minute and second 0–59).
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(GateError::InvalidClockTime(format!(
                "{hour:02}:{minute:02}:{second:02} is out of bounds"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn second(self) -> u8 {
        self.second
    }

    /// Project the time of day out of an instant.
    pub fn from_instant(instant: &NaiveDateTime) -> Self {
        Self {
            hour: instant.hour() as u8,
            minute: instant.minute() as u8,
            second: instant.second() as u8,
        }
    }
}

impl FromStr for ClockTime {
    type Err = GateError;

    /// Parse a 24-hour `HH:MM:SS` string.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(GateError::InvalidClockTime(format!(
                "'{s}' is not HH:MM:SS"
            )));
        };

        let component = |field: &str| {
            field
                .parse::<u8>()
                .map_err(|_| GateError::InvalidClockTime(format!("'{s}' is not HH:MM:SS")))
        };

        Self::new(component(h)?, component(m)?, component(sec)?)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
