//! Splitting identifiers into create, update and orphaned classes.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::defaults::parse_timestamp;
use crate::record::ScheduleRecord;

/// Outcome of comparing local identifiers against a remote snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Local ids that already exist remotely
    pub to_update: BTreeSet<String>,
    /// Local ids that are not in `to_update`
    pub to_create: BTreeSet<String>,
    /// Remote ids with no local record; flagged, never deleted
    pub orphaned: BTreeSet<String>,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.to_update.is_empty() && self.to_create.is_empty() && self.orphaned.is_empty()
    }
}

/// Classify `local_ids` against `remote_ids`.
///
/// An empty remote snapshot means a new calendar: every local id is created
/// and nothing is compared.
pub fn reconcile<L, R>(local_ids: L, remote_ids: R) -> Reconciliation
where
    L: IntoIterator,
    L::Item: Into<String>,
    R: IntoIterator,
    R::Item: Into<String>,
{
    let local: BTreeSet<String> = local_ids.into_iter().map(Into::into).collect();
    let remote: BTreeSet<String> = remote_ids.into_iter().map(Into::into).collect();

    if remote.is_empty() {
        return Reconciliation {
            to_create: local,
            ..Reconciliation::default()
        };
    }

    let to_update: BTreeSet<String> = local.intersection(&remote).cloned().collect();
    let to_create = local.difference(&to_update).cloned().collect();
    let orphaned = remote.difference(&local).cloned().collect();

    Reconciliation {
        to_update,
        to_create,
        orphaned,
    }
}

/// Earliest start among records that have one.
///
/// Falls back to `now` when no record has a start or when any start fails
/// to parse.
pub fn earliest_start(records: &[ScheduleRecord], format: &str, now: NaiveDateTime) -> NaiveDateTime {
    let starts: Result<Vec<NaiveDateTime>, _> = records
        .iter()
        .filter(|record| record.has_start())
        .map(|record| parse_timestamp(&record.start, format))
        .collect();

    match starts {
        Ok(starts) => starts.into_iter().min().unwrap_or(now),
        Err(_) => now,
    }
}
