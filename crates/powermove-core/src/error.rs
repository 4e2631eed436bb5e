use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the power-move calculator.
#[derive(Error, Debug)]
pub enum PowerMoveError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The usage CSV itself could not be decoded (bad quoting, uneven rows).
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The usage CSV header row lacks a required column.
    #[error("Missing required column \"{0}\" in usage CSV")]
    MissingColumn(&'static str),

    /// A dataset row's timestamp could not be parsed.
    #[error("Row {row}: invalid timestamp \"{value}\"")]
    Timestamp { row: u64, value: String },

    /// A dataset row's energy value is not a number.
    #[error("Row {row}: invalid kWh value \"{value}\"")]
    Energy { row: u64, value: String },

    /// A window bound does not match the `HH:MM:SS` 24-hour format.
    #[error("Invalid time format: {0}")]
    IntervalFormat(String),

    /// The current month holds no energy, so the windowed share is undefined.
    #[error("Total energy for the current month is zero; the windowed share is undefined")]
    ZeroMonthTotal,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the powermove crates.
pub type Result<T> = std::result::Result<T, PowerMoveError>;
