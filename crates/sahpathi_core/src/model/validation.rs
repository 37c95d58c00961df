//! Required-field validation failures for module drafts.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected create/update input.
///
/// Each variant maps to one advisory phrase shown (and spoken) to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Note requires title, subject and content.
    MissingNoteFields,
    /// Todo requires non-blank text.
    EmptyTaskText,
    /// Calendar event requires title and date.
    MissingEventFields,
    /// Calendar date is present but not an ISO day.
    InvalidEventDate(String),
    /// Diary entry requires mood and content.
    MissingDiaryFields,
    /// Chat message text is blank.
    EmptyMessage,
}

impl ValidationError {
    /// User-facing advisory phrase.
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::MissingNoteFields => "Please fill all fields",
            Self::EmptyTaskText => "Please enter a task",
            Self::MissingEventFields | Self::InvalidEventDate(_) => "Please fill required fields",
            Self::MissingDiaryFields => "Please select a mood and write something",
            Self::EmptyMessage => "Please type a message",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEventDate(value) => {
                write!(f, "{}: `{value}` is not a YYYY-MM-DD date", self.advisory())
            }
            other => write!(f, "{}", other.advisory()),
        }
    }
}

impl Error for ValidationError {}

/// Returns whether user text counts as filled in.
pub(crate) fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
