//! Stored OAuth tokens.

use std::path::Path;

use chrono::{DateTime, Utc};
use schedsync_core::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};

/// Tokens for a single authenticated account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccountTokens {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Load tokens from a JSON file, rejecting an expired access token.
pub fn load_tokens(path: &Path) -> SyncResult<AccountTokens> {
    let contents = std::fs::read_to_string(path)?;
    let tokens: AccountTokens = serde_json::from_str(&contents)?;

    if tokens.access_token.is_empty() {
        return Err(SyncError::Config(format!(
            "No access token in {}",
            path.display()
        )));
    }

    if tokens.is_expired(Utc::now()) {
        return Err(SyncError::Config(format!(
            "Access token in {} expired; authorize again to refresh it",
            path.display()
        )));
    }

    Ok(tokens)
}
