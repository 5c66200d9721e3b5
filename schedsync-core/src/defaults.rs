//! Filling in a missing start or end timestamp.

use chrono::{Duration, NaiveDateTime};

use crate::error::{SyncError, SyncResult};
use crate::record::{ColorTag, ScheduleRecord};

pub const START_MISSING_MARKER: &str = "**start date missing**\n";
pub const END_MISSING_MARKER: &str = "**end date missing**\n";

/// Parse a schedule timestamp with the configured format.
pub fn parse_timestamp(value: &str, format: &str) -> SyncResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).map_err(|_| SyncError::Timestamp {
        value: value.to_string(),
        format: format.to_string(),
    })
}

/// Parse `value`, move it by `hours` and format it back with the same format.
pub fn shift_timestamp(value: &str, hours: i64, format: &str) -> SyncResult<String> {
    let shifted = parse_timestamp(value, format)? + Duration::hours(hours);
    Ok(shifted.format(format).to_string())
}

/// Return a copy of `record` with a missing timestamp derived from the other.
///
/// A missing start becomes end - 1h and a missing end becomes start + 1h.
/// Either way the color is set to `ColorTag::Warning` and a marker line is
/// prepended to the description. Complete records come back unchanged.
pub fn fill_missing_dates(record: &ScheduleRecord, format: &str) -> SyncResult<ScheduleRecord> {
    let mut filled = record.clone();

    if !filled.has_start() {
        filled.start = shift_timestamp(&filled.end, -1, format)?;
        filled.color = ColorTag::Warning;
        filled.description = format!("{START_MISSING_MARKER}{}", filled.description);
    }

    if !filled.has_end() {
        filled.end = shift_timestamp(&filled.start, 1, format)?;
        filled.color = ColorTag::Warning;
        filled.description = format!("{END_MISSING_MARKER}{}", filled.description);
    }

    Ok(filled)
}
