//! Schedule records read from the source file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Presentation color of an event, as a Google Calendar color id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    /// Neutral color for events copied as-is
    #[default]
    #[serde(rename = "5")]
    Default,
    /// A start or end timestamp was derived from its counterpart
    #[serde(rename = "6")]
    Warning,
    /// The event exists remotely but not in the source file
    #[serde(rename = "11")]
    Attention,
}

impl ColorTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Default => "5",
            ColorTag::Warning => "6",
            ColorTag::Attention => "11",
        }
    }
}

/// One row of the schedule file.
///
/// `start` and `end` hold the raw timestamps in the configured date format.
/// Either may be empty, but a record that passed validation never has both
/// empty and always has a non-empty `number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub customer: String,
    pub start: String,
    pub end: String,
    pub description: String,
    /// Business key as written in the file
    pub number: String,
    pub color: ColorTag,
}

impl ScheduleRecord {
    pub fn new(
        customer: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        description: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            customer: customer.into(),
            start: start.into(),
            end: end.into(),
            description: description.into(),
            number: number.into(),
            color: ColorTag::default(),
        }
    }

    /// Remote event id: the business key in lower case.
    pub fn id(&self) -> String {
        self.number.to_lowercase()
    }

    pub fn has_start(&self) -> bool {
        !self.start.is_empty()
    }

    pub fn has_end(&self) -> bool {
        !self.end.is_empty()
    }
}

impl fmt::Display for ScheduleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer:{},Number:{},StartDate:{},EndDate:{}",
            self.customer, self.number, self.start, self.end
        )
    }
}
