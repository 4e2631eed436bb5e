//! CSV ingestion for usage logs.
//!
//! Reads a log with `dateTime` and `kWh` columns into [`UsageRecord`]s for
//! the aggregation pass. Parsing is strict: the first malformed row aborts
//! the whole load with its file line attached, there is no per-row
//! recovery.

use std::io::Read;
use std::path::Path;

use powermove_core::error::{PowerMoveError, Result};
use powermove_core::models::UsageRecord;
use powermove_core::time_utils::parse_timestamp;
use tracing::debug;

/// Header of the timestamp column.
pub const DATETIME_COLUMN: &str = "dateTime";
/// Header of the energy column.
pub const ENERGY_COLUMN: &str = "kWh";

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load usage records from a CSV file on disk.
pub fn load_usage_records(path: &Path) -> Result<Vec<UsageRecord>> {
    let file = std::fs::File::open(path).map_err(|source| PowerMoveError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_usage_records(file)?;
    debug!("Loaded {} usage records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse usage records from any CSV byte stream.
///
/// The header row must contain `dateTime` and `kWh` columns, matched by
/// exact name; other columns are ignored and column order does not matter.
/// Rows are decoded in file order. Errors carry the 1-based file line of
/// the offending row (the header occupies line 1).
pub fn read_usage_records<R: Read>(input: R) -> Result<Vec<UsageRecord>> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers()?.clone();
    let datetime_idx = column_index(&headers, DATETIME_COLUMN)?;
    let energy_idx = column_index(&headers, ENERGY_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |position| position.line());

        let raw_timestamp = row.get(datetime_idx).unwrap_or("").trim();
        let timestamp = parse_timestamp(raw_timestamp).ok_or_else(|| PowerMoveError::Timestamp {
            row: line,
            value: raw_timestamp.to_string(),
        })?;

        let raw_energy = row.get(energy_idx).unwrap_or("").trim();
        let energy_kwh: f64 = raw_energy.parse().map_err(|_| PowerMoveError::Energy {
            row: line,
            value: raw_energy.to_string(),
        })?;

        records.push(UsageRecord::new(timestamp, energy_kwh));
    }
    Ok(records)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(PowerMoveError::MissingColumn(name))
}
