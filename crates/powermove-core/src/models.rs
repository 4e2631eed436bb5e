use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A single time-stamped energy measurement from a usage log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// UTC instant at which the energy was metered.
    pub timestamp: DateTime<Utc>,
    /// Energy consumed, in kilowatt-hours.
    pub energy_kwh: f64,
}

impl UsageRecord {
    pub fn new(timestamp: DateTime<Utc>, energy_kwh: f64) -> Self {
        Self {
            timestamp,
            energy_kwh,
        }
    }

    /// Clock-time component of the timestamp, used by the window filter.
    pub fn time_of_day(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

/// The outcome of one monthly window aggregation.
///
/// Built fresh on every run from the dataset snapshot and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Sum of energy over every record in the current calendar month, in kWh.
    pub total_month_kwh: f64,
    /// Sum of energy over the records whose time-of-day falls in the window, in kWh.
    pub window_kwh: f64,
    /// `window_kwh / total_month_kwh * 100`.
    pub percentage: f64,
}
