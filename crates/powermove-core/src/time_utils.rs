use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::warn;

// ── MonthWindow ───────────────────────────────────────────────────────────────

/// The half-open UTC range covering one calendar month:
/// `[first instant of the month, first instant of the next month)`.
///
/// Derived from a reference instant on every run, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// 00:00:00 UTC on day 1 of the month (inclusive).
    pub start: DateTime<Utc>,
    /// 00:00:00 UTC on day 1 of the following month (exclusive).
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Compute the window of the calendar month containing `instant`.
    ///
    /// Anchors on day 1 and advances one calendar month, so month lengths
    /// and the December to January rollover need no special cases.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        let first_day = date - Days::new(u64::from(date.day0()));
        Self {
            start: first_day.and_time(NaiveTime::MIN).and_utc(),
            end: (first_day + Months::new(1)).and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// Whether `timestamp` falls inside the half-open month range.
    pub fn contains(self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse a dataset timestamp string into a UTC [`DateTime`].
///
/// Accepts RFC 3339 / ISO 8601 with an offset or trailing `Z`, the common
/// naive date-time shapes found in meter exports, and bare dates (taken as
/// midnight). Naive values are interpreted as UTC. Returns `None` for
/// anything unrecognised.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    // Replace a trailing 'Z' with '+00:00' for RFC 3339 compatibility.
    let normalized = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{stripped}+00:00")
    } else {
        s.to_string()
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    warn!("Could not parse timestamp: {}", s);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_window_mid_month() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        let window = MonthWindow::containing(now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_december_rolls_over() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let window = MonthWindow::containing(now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_leap_february() {
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 6, 0, 0).unwrap();
        let window = MonthWindow::containing(now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_from_first_instant() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let window = MonthWindow::containing(now);
        assert_eq!(window.start, now);
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_contains_is_half_open() {
        let window = MonthWindow::containing(Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_parse_timestamp_with_z_suffix() {
        let result = parse_timestamp("2024-03-15T17:00:00Z").unwrap();
        assert_eq!(result, Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_with_offset_converts_to_utc() {
        let result = parse_timestamp("2024-03-15T17:00:00+02:00").unwrap();
        assert_eq!(result, Utc.with_ymd_and_hms(2024, 3, 15, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_naive_is_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-15T17:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-15 17:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_timestamp_fractional_seconds() {
        let result = parse_timestamp("2024-03-15 17:00:00.250").unwrap();
        assert_eq!(result.time().format("%H:%M:%S%.3f").to_string(), "17:00:00.250");
    }

    #[test]
    fn test_parse_timestamp_bare_date_is_midnight() {
        let result = parse_timestamp("2024-03-15").unwrap();
        assert_eq!(result, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("2024-13-01T00:00:00Z").is_none());
        assert!(parse_timestamp("15/03/2024").is_none());
    }
}
