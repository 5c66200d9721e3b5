//! Reading schedule records from a CSV file.
//!
//! Columns, in order: customer, start, end, description, number.
//! The first row is a header and is skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::error;

use crate::error::SyncResult;
use crate::record::ScheduleRecord;

/// Load and validate records from the schedule file at `path`.
pub fn load_file(path: &Path) -> SyncResult<Vec<ScheduleRecord>> {
    let file = File::open(path)?;
    load_records(file)
}

/// Load and validate records from any CSV source.
///
/// Rows that aren't valid UTF-8 are logged and skipped like any other
/// invalid row. Only a read failure aborts the load.
pub fn load_records<R: Read>(source: R) -> SyncResult<Vec<ScheduleRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut records = Vec::new();
    for row in reader.byte_records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        match StringRecord::from_byte_record(row) {
            Ok(row) => records.push(to_record(&row)),
            Err(e) => error!(
                "Row on line {} is not valid UTF-8 (field {}). Check source file.",
                line,
                e.utf8_error().field()
            ),
        }
    }

    Ok(validate_records(records))
}

/// Short rows read as if the missing trailing columns were empty.
fn to_record(row: &StringRecord) -> ScheduleRecord {
    let field = |i: usize| row.get(i).unwrap_or("");
    ScheduleRecord::new(field(0), field(1), field(2), field(3), field(4))
}

/// Drop records that can't be synced, logging why.
///
/// A record is dropped when both timestamps are empty or when it has no
/// number. Survivors keep their source order and are not modified.
pub fn validate_records(records: Vec<ScheduleRecord>) -> Vec<ScheduleRecord> {
    records
        .into_iter()
        .filter(|record| {
            if !record.has_start() && !record.has_end() {
                error!("{} : Both start and end dates are empty.", record.number);
                false
            } else if record.number.is_empty() {
                error!("No number found for event. Check source file.");
                false
            } else {
                true
            }
        })
        .collect()
}
