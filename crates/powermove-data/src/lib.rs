//! Dataset ingestion and aggregation for the power-move share calculator.
//!
//! Turns a usage CSV into records and runs the monthly window aggregation
//! over the resulting snapshot. Loading and aggregation are deliberately
//! separate steps so the aggregation core can be driven from any record
//! source.

pub mod aggregator;
pub mod reader;

pub use powermove_core as core;
