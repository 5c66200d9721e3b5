//! One sync pass: reconcile the schedule against the calendar, then create,
//! update and flag events through the gateway.
//!
//! Calls are made one at a time. A failed create is logged and counted so
//! the rest of the batch still goes out; a failed update or flag ends the run.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use tracing::{debug, error, info};

use crate::config::SyncConfig;
use crate::defaults::fill_missing_dates;
use crate::error::SyncResult;
use crate::event::EventBody;
use crate::flag::flag_event;
use crate::gateway::{CalendarGateway, EventQuery};
use crate::reconcile::{earliest_start, reconcile, Reconciliation};
use crate::record::ScheduleRecord;

/// Statistics from a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub flagged: usize,
    /// Creates that were rejected and skipped
    pub failed: usize,
}

/// What a run would do, computed from one remote snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// Lower bound used when listing remote events
    pub time_min: DateTime<Utc>,
    pub reconciliation: Reconciliation,
}

pub struct Synchronizer<G> {
    config: SyncConfig,
    gateway: G,
}

impl<G: CalendarGateway> Synchronizer<G> {
    pub fn new(config: SyncConfig, gateway: G) -> Self {
        Self { config, gateway }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Reconcile `records` against the remote calendar without writing.
    pub async fn plan(&self, records: &[ScheduleRecord]) -> SyncResult<SyncPlan> {
        self.plan_at(records, Local::now().naive_local()).await
    }

    /// Like `plan`, with `now` as the fallback listing lower bound.
    pub async fn plan_at(&self, records: &[ScheduleRecord], now: NaiveDateTime) -> SyncResult<SyncPlan> {
        // Naive local timestamps are sent as if they were UTC
        let time_min = earliest_start(records, &self.config.date_format, now).and_utc();
        let query = EventQuery::from_time(time_min, self.config.max_results);

        let remote_events = self
            .gateway
            .list_events(&self.config.calendar_id, &query)
            .await?;

        let reconciliation = reconcile(
            records.iter().map(ScheduleRecord::id),
            remote_events.into_iter().map(|event| event.id),
        );

        info!(
            "Plan since {}: {} to create, {} to update, {} orphaned",
            time_min,
            reconciliation.to_create.len(),
            reconciliation.to_update.len(),
            reconciliation.orphaned.len()
        );

        Ok(SyncPlan {
            time_min,
            reconciliation,
        })
    }

    /// Run a full sync pass over `records`.
    pub async fn run(&self, records: &[ScheduleRecord]) -> SyncResult<SyncReport> {
        let plan = self.plan(records).await?;
        self.apply(records, &plan).await
    }

    /// Carry out `plan` for `records`.
    pub async fn apply(&self, records: &[ScheduleRecord], plan: &SyncPlan) -> SyncResult<SyncReport> {
        let mut report = SyncReport::default();
        let reconciliation = &plan.reconciliation;

        for record in records {
            let record = fill_missing_dates(record, &self.config.date_format)?;
            let id = record.id();

            if reconciliation.to_update.contains(&id) {
                self.update(&record).await?;
                report.updated += 1;
            } else if reconciliation.to_create.contains(&id) {
                if self.create(&record).await {
                    report.created += 1;
                } else {
                    report.failed += 1;
                }
            }
        }

        for id in &reconciliation.orphaned {
            self.flag(id).await?;
            report.flagged += 1;
        }

        info!(
            "Sync finished: {} created, {} updated, {} flagged, {} failed",
            report.created, report.updated, report.flagged, report.failed
        );

        Ok(report)
    }

    /// Insert an event for `record`, logging instead of failing.
    async fn create(&self, record: &ScheduleRecord) -> bool {
        let result = match self.body(record) {
            Ok(body) => self.gateway.insert_event(&self.config.calendar_id, &body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                debug!("{} created", record.id());
                true
            }
            Err(e) => {
                error!("Event details: {}. Import failed: {}.", record, e);
                false
            }
        }
    }

    async fn update(&self, record: &ScheduleRecord) -> SyncResult<()> {
        let body = self.body(record)?;
        self.gateway
            .update_event(&self.config.calendar_id, &body.id, &body)
            .await?;
        debug!("{} event updated", body.id);
        Ok(())
    }

    /// Fetch the remote event, mark it as missing from the source and write it back.
    async fn flag(&self, id: &str) -> SyncResult<()> {
        let event = self.gateway.get_event(&self.config.calendar_id, id).await?;
        let flagged = flag_event(event);
        self.gateway
            .replace_event(&self.config.calendar_id, &flagged.id, &flagged)
            .await?;
        debug!("{} flagged", flagged.id);
        Ok(())
    }

    fn body(&self, record: &ScheduleRecord) -> SyncResult<EventBody> {
        EventBody::from_record(record, &self.config.date_format, &self.config.time_zone)
    }
}
