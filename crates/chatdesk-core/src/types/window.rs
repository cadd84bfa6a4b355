//! Daily time-of-day windows used for agent shifts and office hours.
//!
//! A window is half-open: `[start, end)`. When `start > end` the window
//! wraps past midnight (an overnight shift such as `20:00`–`06:00`).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A daily `[start, end)` window in local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeWindowRepr", into = "TimeWindowRepr")]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    /// Create a window, rejecting empty ones (`start == end`).
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, AppError> {
        if start == end {
            return Err(AppError::configuration(format!(
                "time window {} - {} is empty",
                format_time(start),
                format_time(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a window from whole hours. `24` is accepted as midnight.
    pub fn from_hours(start: u32, end: u32) -> Result<Self, AppError> {
        Self::new(hour_to_time(start)?, hour_to_time(end)?)
    }

    /// Parse a window from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(parse_time_of_day(start)?, parse_time_of_day(end)?)
    }

    /// Window start (inclusive).
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Window end (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether the window wraps past midnight.
    pub fn is_overnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether the given time of day falls inside the window.
    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.start <= self.end {
            t >= self.start && t < self.end
        } else {
            t >= self.start || t < self.end
        }
    }
}

impl Default for TimeWindow {
    /// The standard office day, `09:00`-`17:00`.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}

/// Wire representation: two `HH:MM` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimeWindowRepr {
    start: String,
    end: String,
}

impl TryFrom<TimeWindowRepr> for TimeWindow {
    type Error = AppError;

    fn try_from(repr: TimeWindowRepr) -> Result<Self, Self::Error> {
        Self::parse(&repr.start, &repr.end)
    }
}

impl From<TimeWindow> for TimeWindowRepr {
    fn from(window: TimeWindow) -> Self {
        Self {
            start: format_time(window.start),
            end: format_time(window.end),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = AppError;

    /// Parse `"HH:MM-HH:MM"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| AppError::configuration(format!("invalid time window '{s}'")))?;
        Self::parse(start.trim(), end.trim())
    }
}

/// Parse `HH:MM` or `HH:MM:SS`. `24:00` is accepted and means midnight.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, AppError> {
    let trimmed = s.trim();
    if trimmed == "24:00" || trimmed == "24:00:00" {
        return Ok(NaiveTime::default());
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| AppError::with_source(
            crate::error::ErrorKind::Configuration,
            format!("invalid time of day '{s}'"),
            e,
        ))
}

fn hour_to_time(hour: u32) -> Result<NaiveTime, AppError> {
    let hour = if hour == 24 { 0 } else { hour };
    NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| AppError::configuration(format!("invalid hour {hour}")))
}

fn format_time(t: NaiveTime) -> String {
    if t.second() == 0 {
        format!("{:02}:{:02}", t.hour(), t.minute())
    } else {
        format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
    }
}
