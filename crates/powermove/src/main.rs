mod bootstrap;

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use powermove_core::error::{PowerMoveError, Result};
use powermove_core::interval::ClockInterval;
use powermove_core::report;
use powermove_core::settings::Settings;
use powermove_data::aggregator::MonthlyWindowAggregator;
use powermove_data::reader;
use tracing::{info, warn};

fn main() -> ExitCode {
    let settings = Settings::parse();

    if let Err(error) = bootstrap::setup_logging(settings.effective_log_level()) {
        eprintln!("Failed to initialise logging: {error}");
        return ExitCode::FAILURE;
    }

    info!("powermove v{} starting", env!("CARGO_PKG_VERSION"));

    match run_with_now(&settings, Utc::now()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", user_message(&error));
            ExitCode::FAILURE
        }
    }
}

/// Execute the full pipeline against an explicit reference instant.
///
/// `now` is a parameter rather than read inside, so the whole flow stays
/// deterministic under test; `main` passes the real current time.
fn run_with_now(settings: &Settings, now: DateTime<Utc>) -> Result<String> {
    let interval = ClockInterval::parse(&settings.start, &settings.end)?;
    if interval.wraps_midnight() {
        warn!(
            "Window {} does not end after it starts; it matches no time-of-day, so the windowed total will be 0.00",
            interval
        );
    }

    let records = reader::load_usage_records(&settings.usage_csv)?;
    info!(
        "Loaded {} usage records from {}",
        records.len(),
        settings.usage_csv.display()
    );

    let result = MonthlyWindowAggregator::aggregate(&records, interval, now)?;
    Ok(report::render(&result, interval))
}

/// The line shown on stderr for a failed run.
///
/// The core reports error kinds and offending values; the wording here
/// belongs to the presentation layer.
fn user_message(error: &PowerMoveError) -> String {
    match error {
        PowerMoveError::IntervalFormat(_) => {
            "Invalid time format. Please use HH:MM:SS.".to_string()
        }
        PowerMoveError::ZeroMonthTotal => {
            "No energy recorded in the current month; nothing to report.".to_string()
        }
        other => other.to_string(),
    }
}
