//! Calendar events.

use super::id::RecordId;
use super::validation::{is_filled, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ISO day format used for event dates.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Exam,
    Holiday,
    Assignment,
    #[default]
    Event,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [Self::Exam, Self::Holiday, Self::Assignment, Self::Event];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exam => "exam",
            Self::Holiday => "holiday",
            Self::Assignment => "assignment",
            Self::Event => "event",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
    }
}

/// Persisted calendar record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub description: String,
}

/// Create input for a calendar event; `date` is raw `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub kind: EventKind,
    pub description: String,
}

impl EventDraft {
    /// Checks title and date and returns the parsed day.
    pub fn validate(&self) -> Result<NaiveDate, ValidationError> {
        if !is_filled(&self.title) || !is_filled(&self.date) {
            return Err(ValidationError::MissingEventFields);
        }
        NaiveDate::parse_from_str(self.date.trim(), EVENT_DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidEventDate(self.date.trim().to_string()))
    }
}
