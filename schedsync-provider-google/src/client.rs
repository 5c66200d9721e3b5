use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::{Client, Response};
use schedsync_core::{
    CalendarGateway, EventBody, EventQuery, RemoteEvent, SyncError, SyncResult,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::token::AccountTokens;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Calendar gateway backed by the Google Calendar v3 API
#[derive(Debug, Clone)]
pub struct GoogleCalendar {
    client: Client,
    base_url: Url,
    access_token: String,
}

/// One page of an events listing. Only the first page is read.
#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<RemoteEvent>,
}

impl GoogleCalendar {
    pub fn new(access_token: impl Into<String>) -> SyncResult<Self> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    pub fn from_tokens(tokens: &AccountTokens) -> SyncResult<Self> {
        Self::new(tokens.access_token.clone())
    }

    /// Point the gateway at another API root, e.g. a local mock server.
    pub fn with_base_url(access_token: impl Into<String>, base_url: &str) -> SyncResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SyncError::Config(format!("Invalid API base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::Config(format!("Invalid API base URL '{}'", base_url)));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            access_token: access_token.into(),
        })
    }

    /// `{base}/calendars/{calendar_id}/events[/{event_id}]`, each segment percent-encoded.
    fn events_url(&self, calendar_id: &str, event_id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["calendars", calendar_id, "events"]);
            if let Some(event_id) = event_id {
                segments.push(event_id);
            }
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder, action: &str) -> SyncResult<Response> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| SyncError::Gateway(format!("Failed to {}: {}", action, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(SyncError::Gateway(format!(
                "Failed to {}: HTTP {} - {}",
                action, status, body
            )));
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response, action: &str) -> SyncResult<T> {
        response
            .json()
            .await
            .map_err(|e| SyncError::Gateway(format!("Failed to parse response to {}: {}", action, e)))
    }
}

#[async_trait]
impl CalendarGateway for GoogleCalendar {
    async fn list_events(&self, calendar_id: &str, query: &EventQuery) -> SyncResult<Vec<RemoteEvent>> {
        let mut url = self.events_url(calendar_id, None);
        url.query_pairs_mut()
            .append_pair(
                "timeMin",
                &query.time_min.to_rfc3339_opts(SecondsFormat::Secs, true),
            )
            .append_pair("maxResults", &query.max_results.to_string())
            .append_pair("singleEvents", &query.single_events.to_string())
            .append_pair("orderBy", query.order_by.as_str());

        let response = self.send(self.client.get(url), "list events").await?;
        let list: EventList = Self::read_json(response, "list events").await?;

        debug!("Fetched {} events from {}", list.items.len(), calendar_id);
        Ok(list.items)
    }

    async fn insert_event(&self, calendar_id: &str, body: &EventBody) -> SyncResult<()> {
        let url = self.events_url(calendar_id, None);
        let action = format!("create event {}", body.id);
        self.send(self.client.post(url).json(body), &action).await?;
        Ok(())
    }

    async fn update_event(&self, calendar_id: &str, id: &str, body: &EventBody) -> SyncResult<()> {
        let url = self.events_url(calendar_id, Some(id));
        let action = format!("update event {}", id);
        self.send(self.client.put(url).json(body), &action).await?;
        Ok(())
    }

    async fn replace_event(&self, calendar_id: &str, id: &str, event: &RemoteEvent) -> SyncResult<()> {
        let url = self.events_url(calendar_id, Some(id));
        let action = format!("update event {}", id);
        self.send(self.client.put(url).json(event), &action).await?;
        Ok(())
    }

    async fn get_event(&self, calendar_id: &str, id: &str) -> SyncResult<RemoteEvent> {
        let url = self.events_url(calendar_id, Some(id));
        let action = format!("get event {}", id);
        let response = self.send(self.client.get(url), &action).await?;
        Self::read_json(response, &action).await
    }
}
