//! The monthly window aggregation pass.
//!
//! Answers one question about a dataset snapshot: of all the energy
//! consumed in the current calendar month, how much fell inside the daily
//! clock-time window, and what share of the monthly total is that.

use chrono::{DateTime, Utc};
use powermove_core::error::{PowerMoveError, Result};
use powermove_core::interval::ClockInterval;
use powermove_core::models::{AggregationResult, UsageRecord};
use powermove_core::time_utils::MonthWindow;

// ── MonthlyWindowAggregator ───────────────────────────────────────────────────

/// Stateless aggregation over a dataset snapshot and a reference instant.
pub struct MonthlyWindowAggregator;

impl MonthlyWindowAggregator {
    /// Compute the monthly total, the windowed total and their percentage.
    ///
    /// `now` fixes the month under consideration: the half-open UTC range
    /// from the first instant of its calendar month to the first instant of
    /// the next. Records outside that range are ignored. Within it, a
    /// record contributes to the windowed sum when its time-of-day lies in
    /// `[interval.start, interval.end)`.
    ///
    /// The scan is a single pass holding two running sums; the dataset is
    /// read once and never copied, and record order has no effect on which
    /// records are selected.
    ///
    /// # Errors
    ///
    /// [`PowerMoveError::ZeroMonthTotal`] when the monthly sum is zero
    /// (no records in the month, or only zero readings): the share is
    /// undefined and is reported as an error rather than a silent NaN.
    pub fn aggregate(
        records: &[UsageRecord],
        interval: ClockInterval,
        now: DateTime<Utc>,
    ) -> Result<AggregationResult> {
        let month = MonthWindow::containing(now);

        let mut total_month_kwh = 0.0;
        let mut window_kwh = 0.0;
        for record in records {
            if !month.contains(record.timestamp) {
                continue;
            }
            total_month_kwh += record.energy_kwh;
            if interval.contains(record.time_of_day()) {
                window_kwh += record.energy_kwh;
            }
        }

        if total_month_kwh == 0.0 {
            return Err(PowerMoveError::ZeroMonthTotal);
        }

        Ok(AggregationResult {
            total_month_kwh,
            window_kwh,
            percentage: window_kwh / total_month_kwh * 100.0,
        })
    }
}
