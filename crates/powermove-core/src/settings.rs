//! Command-line settings.

use std::path::PathBuf;

use clap::Parser;

/// Command-line parameters for the power-move share calculator.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "powermove",
    about = "Computes the share of the current month's energy that falls inside a daily clock-time window",
    version
)]
pub struct Settings {
    /// Path to the usage CSV (must carry dateTime and kWh columns)
    pub usage_csv: PathBuf,

    /// Window start time, 24-hour HH:MM:SS
    #[arg(long, default_value = "16:00:00")]
    pub start: String,

    /// Window end time, 24-hour HH:MM:SS
    #[arg(long, default_value = "19:00:00")]
    pub end: String,

    /// Logging level
    #[arg(
        long,
        default_value = "INFO",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// The log level after applying the `--debug` shortcut.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["powermove", "usage.csv"]);
        assert_eq!(settings.usage_csv, PathBuf::from("usage.csv"));
        assert_eq!(settings.start, "16:00:00");
        assert_eq!(settings.end, "19:00:00");
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    #[test]
    fn test_explicit_window() {
        let settings = Settings::parse_from([
            "powermove",
            "data/march.csv",
            "--start",
            "08:00:00",
            "--end",
            "20:00:00",
        ]);
        assert_eq!(settings.start, "08:00:00");
        assert_eq!(settings.end, "20:00:00");
    }

    #[test]
    fn test_usage_csv_is_required() {
        assert!(Settings::try_parse_from(["powermove"]).is_err());
    }

    #[test]
    fn test_log_level_choices() {
        let settings = Settings::parse_from(["powermove", "usage.csv", "--log-level", "WARNING"]);
        assert_eq!(settings.log_level, "WARNING");
        assert!(Settings::try_parse_from(["powermove", "usage.csv", "--log-level", "TRACE"]).is_err());
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let settings = Settings::parse_from(["powermove", "usage.csv", "--debug"]);
        assert_eq!(settings.effective_log_level(), "DEBUG");

        let settings = Settings::parse_from(["powermove", "usage.csv", "--log-level", "ERROR"]);
        assert_eq!(settings.effective_log_level(), "ERROR");
    }
}
