//! Sync configuration.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{SyncError, SyncResult};

static DEFAULT_SOURCE_PATH: &str = "schedule.csv";
static DEFAULT_CALENDAR_ID: &str = "primary";
static DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
static DEFAULT_TIME_ZONE: &str = "America/New_York";
const DEFAULT_MAX_RESULTS: u32 = 100;

fn default_source_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_PATH)
}

fn default_calendar_id() -> String {
    DEFAULT_CALENDAR_ID.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

/// Settings for one sync pass.
///
/// `date_format` is used both to read timestamps from the schedule file and
/// to write derived timestamps back, so the two always agree.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    /// chrono format string for the start and end columns
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// IANA time zone attached to every event body
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Upper bound on remote events fetched for comparison
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            calendar_id: default_calendar_id(),
            date_format: default_date_format(),
            time_zone: default_time_zone(),
            max_results: default_max_results(),
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> SyncResult<()> {
        if self.calendar_id.trim().is_empty() {
            return Err(SyncError::Config("calendar_id must not be empty".into()));
        }
        if self.date_format.trim().is_empty() {
            return Err(SyncError::Config("date_format must not be empty".into()));
        }
        check_date_format(&self.date_format)?;
        if self.max_results == 0 {
            return Err(SyncError::Config("max_results must be at least 1".into()));
        }
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| SyncError::Config(format!("Unknown time zone '{}'", self.time_zone)))?;
        Ok(())
    }
}

/// The format must be valid strftime and carry both a date and a time of day,
/// since start and end timestamps are parsed as full date-times.
fn check_date_format(format: &str) -> SyncResult<()> {
    let sample = NaiveDate::from_ymd_opt(2024, 1, 5)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .ok_or_else(|| SyncError::Config("Could not build sample timestamp".into()))?;

    let mut formatted = String::new();
    let round_trips = write!(formatted, "{}", sample.format(format)).is_ok()
        && NaiveDateTime::parse_from_str(&formatted, format).is_ok();

    if !round_trips {
        return Err(SyncError::Config(format!(
            "date_format '{}' must describe a date and a time of day, e.g. '%Y-%m-%d %H:%M'",
            format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SyncConfig::default();
        assert_eq!(config.calendar_id, "primary");
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.max_results, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_time_zone_is_rejected() {
        let config = SyncConfig {
            time_zone: "Mars/Olympus_Mons".to_string(),
            ..SyncConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));
    }

    #[test]
    fn test_date_only_format_is_rejected() {
        let config = SyncConfig {
            date_format: "%Y-%m-%d".to_string(),
            ..SyncConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SyncError::Config(ref message) if message.contains("%Y-%m-%d")));
    }

    #[test]
    fn test_malformed_format_is_rejected() {
        let config = SyncConfig {
            date_format: "%Y-%m-%d %Q".to_string(),
            ..SyncConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_other_date_time_formats_are_accepted() {
        for format in ["%d/%m/%Y %H:%M", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %I:%M %p"] {
            let config = SyncConfig {
                date_format: format.to_string(),
                ..SyncConfig::default()
            };
            assert!(config.validate().is_ok(), "{format} should be accepted");
        }
    }

    #[test]
    fn test_empty_calendar_id_is_rejected() {
        let config = SyncConfig {
            calendar_id: "  ".to_string(),
            ..SyncConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SyncConfig =
            serde_json::from_str(r#"{"calendar_id": "team@group.calendar.google.com"}"#).unwrap();
        assert_eq!(config.calendar_id, "team@group.calendar.google.com");
        assert_eq!(config.source_path, PathBuf::from("schedule.csv"));
        assert_eq!(config.time_zone, "America/New_York");
    }
}
