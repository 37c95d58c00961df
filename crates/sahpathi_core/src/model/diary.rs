//! Mood diary entries.

use super::id::RecordId;
use super::validation::{is_filled, ValidationError};
use serde::{Deserialize, Serialize};

/// One of the six moods an entry is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Angry,
    Loved,
    Excited,
}

impl Mood {
    /// Declaration order, also used for mood statistics.
    pub const ALL: [Mood; 6] = [
        Self::Happy,
        Self::Calm,
        Self::Sad,
        Self::Angry,
        Self::Loved,
        Self::Excited,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Loved => "Loved",
            Self::Excited => "Excited",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Calm => "😌",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Loved => "🥰",
            Self::Excited => "🤩",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.as_str() == value.trim())
    }
}

/// Persisted diary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: RecordId,
    /// Long display day, e.g. `Saturday, October 18, 2026`.
    pub date: String,
    pub mood: Mood,
    pub emoji: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryDraft {
    pub mood: Option<Mood>,
    pub content: String,
}

impl DiaryDraft {
    pub fn validate(&self) -> Result<Mood, ValidationError> {
        match self.mood {
            Some(mood) if is_filled(&self.content) => Ok(mood),
            _ => Err(ValidationError::MissingDiaryFields),
        }
    }
}
