//! The calendar service seam.
//!
//! Implementations own transport and credentials. Everything in this crate
//! talks to the calendar only through `CalendarGateway`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::SyncResult;
use crate::event::{EventBody, RemoteEvent};

/// Parameters of a remote event listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Lower bound on event end time
    pub time_min: DateTime<Utc>,
    pub max_results: u32,
    /// Expand recurring events into single instances
    pub single_events: bool,
    pub order_by: OrderBy,
}

/// Listing order. Reconciliation only ever lists by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    StartTime,
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::StartTime => "startTime",
        }
    }
}

impl EventQuery {
    /// Single instances ordered by start time, as used for reconciliation.
    pub fn from_time(time_min: DateTime<Utc>, max_results: u32) -> Self {
        Self {
            time_min,
            max_results,
            single_events: true,
            order_by: OrderBy::StartTime,
        }
    }
}

#[async_trait]
pub trait CalendarGateway: Send + Sync {
    async fn list_events(&self, calendar_id: &str, query: &EventQuery) -> SyncResult<Vec<RemoteEvent>>;

    async fn insert_event(&self, calendar_id: &str, body: &EventBody) -> SyncResult<()>;

    /// Overwrite event `id` with a body built from a schedule record.
    async fn update_event(&self, calendar_id: &str, id: &str, body: &EventBody) -> SyncResult<()>;

    /// Overwrite event `id` with a previously fetched and modified event.
    async fn replace_event(&self, calendar_id: &str, id: &str, event: &RemoteEvent) -> SyncResult<()>;

    async fn get_event(&self, calendar_id: &str, id: &str) -> SyncResult<RemoteEvent>;
}
