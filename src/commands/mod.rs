pub mod plan;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use schedsync_core::loader::load_file;
use schedsync_core::{ScheduleRecord, Synchronizer};
use schedsync_provider_google::token::load_tokens;
use schedsync_provider_google::GoogleCalendar;

use crate::config::{self, Config};

/// Everything a command needs: validated records and a connected synchronizer.
pub struct SyncContext {
    pub records: Vec<ScheduleRecord>,
    pub synchronizer: Synchronizer<GoogleCalendar>,
}

impl SyncContext {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Config { sync, google } = config::load_config(config_path)?;

        let records = load_file(&sync.source_path).with_context(|| {
            format!("Failed to load schedule from {}", sync.source_path.display())
        })?;

        let token_path = config::expand_path(&google.token_path);
        let tokens = load_tokens(&token_path)
            .with_context(|| format!("Failed to load Google token from {}", token_path.display()))?;
        let gateway = GoogleCalendar::from_tokens(&tokens)?;

        Ok(Self {
            records,
            synchronizer: Synchronizer::new(sync, gateway),
        })
    }
}
