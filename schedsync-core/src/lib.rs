//! Core types for schedsync.
//!
//! This crate turns rows of a schedule file into calendar events:
//! - `loader` reads and validates `ScheduleRecord`s
//! - `defaults` fills a missing start or end timestamp
//! - `reconcile` splits identifiers into create, update and orphaned classes
//! - `sync` drives a `CalendarGateway` through one pass

pub mod config;
pub mod defaults;
pub mod error;
pub mod event;
pub mod flag;
pub mod gateway;
pub mod loader;
pub mod reconcile;
pub mod record;
pub mod sync;

pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use event::{EventBody, EventDateTime, RemoteEvent};
pub use gateway::{CalendarGateway, EventQuery};
pub use reconcile::Reconciliation;
pub use record::{ColorTag, ScheduleRecord};
pub use sync::{SyncPlan, SyncReport, Synchronizer};
