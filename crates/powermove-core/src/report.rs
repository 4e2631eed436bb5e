//! Rendering of the final result report.

use crate::interval::ClockInterval;
use crate::models::AggregationResult;

/// Render the three-line report printed after a successful aggregation.
///
/// Line one is the monthly total, line two the windowed total with the
/// window bounds embedded, line three the percentage. All values use two
/// decimal places and the string carries no trailing newline.
///
/// # Examples
///
/// ```
/// use powermove_core::interval::ClockInterval;
/// use powermove_core::models::AggregationResult;
/// use powermove_core::report;
///
/// let result = AggregationResult {
///     total_month_kwh: 15.0,
///     window_kwh: 5.0,
///     percentage: 100.0 / 3.0,
/// };
/// let interval = ClockInterval::parse("16:00:00", "19:00:00").unwrap();
/// assert!(report::render(&result, interval).ends_with("33.33%"));
/// ```
pub fn render(result: &AggregationResult, interval: ClockInterval) -> String {
    format!(
        "Total kWh for the current month: {:.2}\n\
         Total kWh between {} and {} for the current month: {:.2}\n\
         Percentage of power-move kWh compared to the monthly total: {:.2}%",
        result.total_month_kwh,
        interval.start.format("%H:%M:%S"),
        interval.end.format("%H:%M:%S"),
        result.window_kwh,
        result.percentage,
    )
}
