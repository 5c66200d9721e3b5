//! Calendar event payloads exchanged with the gateway.
//!
//! Field names follow the Google Calendar v3 event resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::defaults::parse_timestamp;
use crate::error::SyncResult;
use crate::record::{ColorTag, ScheduleRecord};

/// Date-time layout sent to the calendar: date and minutes, zero seconds.
pub const EVENT_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

/// Body sent when creating or updating an event from a schedule record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: String,
    /// Customer name
    pub summary: String,
    /// Business key in its original casing
    pub location: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub color_id: ColorTag,
}

impl EventBody {
    /// Build the body for a record whose timestamps are both present.
    pub fn from_record(record: &ScheduleRecord, date_format: &str, time_zone: &str) -> SyncResult<Self> {
        let date_time = |value: &str| -> SyncResult<EventDateTime> {
            let parsed = parse_timestamp(value, date_format)?;
            Ok(EventDateTime {
                date_time: parsed.format(EVENT_DATE_TIME_FORMAT).to_string(),
                time_zone: time_zone.to_string(),
            })
        };

        Ok(Self {
            id: record.id(),
            summary: record.customer.clone(),
            location: record.number.clone(),
            description: record.description.clone(),
            start: date_time(&record.start)?,
            end: date_time(&record.end)?,
            color_id: record.color,
        })
    }
}

/// An event as stored by the calendar service.
///
/// Only the fields this tool rewrites are typed; everything else is kept in
/// `extra` so that writing the event back doesn't lose data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEvent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    const FORMAT: &str = "%Y-%m-%d %H:%M";

    fn record() -> ScheduleRecord {
        ScheduleRecord::new("Acme", "2024-01-05 09:00", "2024-01-05 10:30", "Consult", "A1")
    }

    #[test]
    fn test_body_from_record() {
        let body = EventBody::from_record(&record(), FORMAT, "America/New_York").unwrap();

        assert_eq!(body.id, "a1");
        assert_eq!(body.summary, "Acme");
        assert_eq!(body.location, "A1");
        assert_eq!(body.start.date_time, "2024-01-05T09:00:00");
        assert_eq!(body.end.date_time, "2024-01-05T10:30:00");
        assert_eq!(body.end.time_zone, "America/New_York");
        assert_eq!(body.color_id, ColorTag::Default);
    }

    #[test]
    fn test_body_timestamps_reformat_to_source() {
        let record = record();
        let body = EventBody::from_record(&record, FORMAT, "UTC").unwrap();

        for (sent, source) in [(&body.start, &record.start), (&body.end, &record.end)] {
            let parsed = NaiveDateTime::parse_from_str(&sent.date_time, "%Y-%m-%dT%H:%M:%S").unwrap();
            assert_eq!(parsed.format(FORMAT).to_string(), *source);
            assert_eq!(sent.date_time[0..10], source[0..10]);
            assert_eq!(sent.date_time[11..16], source[11..16]);
        }
    }

    #[test]
    fn test_body_serializes_google_field_names() {
        let body = EventBody::from_record(&record(), FORMAT, "UTC").unwrap();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["colorId"], json!("5"));
        assert_eq!(value["start"]["dateTime"], json!("2024-01-05T09:00:00"));
        assert_eq!(value["start"]["timeZone"], json!("UTC"));
    }

    #[test]
    fn test_body_requires_both_timestamps() {
        let record = ScheduleRecord::new("Beta", "", "2024-01-06 14:00", "Setup", "B2");
        assert!(EventBody::from_record(&record, FORMAT, "UTC").is_err());
    }

    #[test]
    fn test_remote_event_keeps_unknown_fields() {
        let raw = json!({
            "id": "a1",
            "summary": "Acme",
            "description": "Consult",
            "etag": "\"3181161784712000\"",
            "start": {"dateTime": "2024-01-05T09:00:00-05:00"}
        });

        let event: RemoteEvent = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(event.description.as_deref(), Some("Consult"));
        assert_eq!(event.color_id, None);
        assert_eq!(serde_json::to_value(&event).unwrap(), raw);
    }
}
