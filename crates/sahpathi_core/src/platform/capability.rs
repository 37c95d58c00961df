//! Platform capability identifiers and their failure type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host feature the core may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlatformCapability {
    Narration,
    Dictation,
    Haptics,
}

impl PlatformCapability {
    /// Stable string id used by host bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narration => "narration",
            Self::Dictation => "dictation",
            Self::Haptics => "haptics",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Narration => "Read actions and content aloud with text-to-speech.",
            Self::Dictation => "Fill text fields by speaking instead of typing.",
            Self::Haptics => "Vibrate briefly to confirm completed actions.",
        }
    }

    /// Advisory spoken when the capability is missing.
    pub fn unsupported_advisory(self) -> &'static str {
        match self {
            Self::Narration => "Speech output not supported",
            Self::Dictation => "Voice input not supported",
            Self::Haptics => "Vibration not supported",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "narration" => Some(Self::Narration),
            "dictation" => Some(Self::Dictation),
            "haptics" => Some(Self::Haptics),
            _ => None,
        }
    }
}

/// Capability use failed without affecting any collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    Unsupported(PlatformCapability),
    /// Session already finished; events after the end are rejected.
    SessionClosed,
}

impl CapabilityError {
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Unsupported(capability) => capability.unsupported_advisory(),
            Self::SessionClosed => "Voice input error",
        }
    }
}

impl Display for CapabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(capability) => {
                write!(f, "platform capability unsupported: {}", capability.as_str())
            }
            Self::SessionClosed => write!(f, "dictation session already ended"),
        }
    }
}

impl Error for CapabilityError {}
