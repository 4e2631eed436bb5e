//! Domain types and pure logic for the power-move share calculator.
//!
//! Holds the record and result models, the clock-time window, the derived
//! calendar-month range, the error taxonomy, the report renderer and the
//! CLI settings. Everything here is synchronous and free of file I/O;
//! dataset ingestion and the aggregation pass live in `powermove-data`.

pub mod error;
pub mod interval;
pub mod models;
pub mod report;
pub mod settings;
pub mod time_utils;
