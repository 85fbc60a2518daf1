//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical UTC instant used throughout the
//! engine. Internally every computation works on Julian Dates; `UtcTime`
//! is the boundary representation for callers.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Checked constructor: rejects out-of-range calendar fields.
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate("day must be 1-31"));
        }
        if hour >= 24 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Convert to a UTC Julian Date.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a UTC Julian Date back to a calendar instant.
    pub fn from_jd_utc(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let frac = day_frac.fract();
        let total_seconds = frac * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date of 0h UT on this instant's calendar date.
    pub fn date_jd0(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// This instant shifted by a (possibly fractional, possibly negative)
    /// number of days.
    pub fn plus_days(&self, days: f64) -> Self {
        Self::from_jd_utc(self.to_jd_utc() + days)
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DDThh:mm:ssZ`.
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_parts: Vec<&str> = date_part.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {date_part}")));
        }
        let year: i32 = date_parts[0]
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad year: {}", date_parts[0])))?;
        let month: u32 = date_parts[1]
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad month: {}", date_parts[1])))?;
        let day: u32 = date_parts[2]
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad day: {}", date_parts[2])))?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                if time_parts.len() != 3 {
                    return Err(TimeError::Parse(format!("expected hh:mm:ss, got {t}")));
                }
                let hour: u32 = time_parts[0]
                    .parse()
                    .map_err(|_| TimeError::Parse(format!("bad hour: {}", time_parts[0])))?;
                let minute: u32 = time_parts[1]
                    .parse()
                    .map_err(|_| TimeError::Parse(format!("bad minute: {}", time_parts[1])))?;
                let second: f64 = time_parts[2]
                    .parse()
                    .map_err(|_| TimeError::Parse(format!("bad second: {}", time_parts[2])))?;
                (hour, minute, second)
            }
        };

        Self::from_fields(year, month, day, hour, minute, second)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
