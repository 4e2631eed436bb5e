use std::fmt;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PowerMoveError, Result};

// ── ClockInterval ─────────────────────────────────────────────────────────────

/// A daily clock-time window, applied as the half-open range `[start, end)`
/// to the time-of-day of each record.
///
/// The comparison is literal. A window whose `end` does not lie after its
/// `start` (for example 22:00:00 to 02:00:00) matches no time at all;
/// callers can detect that case with [`ClockInterval::wraps_midnight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockInterval {
    /// Inclusive lower bound of the window.
    pub start: NaiveTime,
    /// Exclusive upper bound of the window.
    pub end: NaiveTime,
}

impl ClockInterval {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse two `HH:MM:SS` strings into an interval.
    ///
    /// Both bounds must match the strict 24-hour form with two digits per
    /// component; anything else is rejected with
    /// [`PowerMoveError::IntervalFormat`] before any aggregation runs.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_clock_time(start)?, parse_clock_time(end)?))
    }

    /// Whether `time` lies inside the half-open window `[start, end)`.
    pub fn contains(self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }

    /// Whether the window runs past midnight (`end <= start`).
    ///
    /// Such a window matches no time-of-day under the literal range
    /// comparison, so the windowed total comes out as zero.
    pub fn wraps_midnight(self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for ClockInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%H:%M:%S"),
            self.end.format("%H:%M:%S")
        )
    }
}

/// Strict `HH:MM:SS` parser for window bounds.
fn parse_clock_time(value: &str) -> Result<NaiveTime> {
    let shape = Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("regex is valid");
    if !shape.is_match(value) {
        return Err(PowerMoveError::IntervalFormat(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| PowerMoveError::IntervalFormat(value.to_string()))
}
