//! Subject notes.

use super::id::RecordId;
use super::validation::{is_filled, ValidationError};
use serde::{Deserialize, Serialize};

/// Closed set of school subjects a note can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Science,
    History,
    English,
    Gujarati,
    Computer,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Self::Math,
        Self::Science,
        Self::History,
        Self::English,
        Self::Gujarati,
        Self::Computer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Science => "Science",
            Self::History => "History",
            Self::English => "English",
            Self::Gujarati => "Gujarati",
            Self::Computer => "Computer",
        }
    }

    /// Parses the display label, e.g. `Math`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == value.trim())
    }
}

/// Persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub subject: Subject,
    pub content: String,
    /// Creation day as shown to the user (`M/D/YYYY`).
    pub date: String,
}

/// Create/edit input for a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub subject: Option<Subject>,
    pub content: String,
}

impl NoteDraft {
    /// Checks all three fields are filled and returns the chosen subject.
    pub fn validate(&self) -> Result<Subject, ValidationError> {
        match self.subject {
            Some(subject) if is_filled(&self.title) && is_filled(&self.content) => Ok(subject),
            _ => Err(ValidationError::MissingNoteFields),
        }
    }
}
