//! Voice dictation into a single text field.
//!
//! # Responsibility
//! - Turn host transcript events into edits of one input field.
//! - Enforce the listening ceiling and explicit stop.
//!
//! # Invariants
//! - On an unavailable platform no session is created and the field is left
//!   untouched.
//! - After a session ends, further events are rejected and never edit the
//!   field.

use super::capability::{CapabilityError, PlatformCapability};
use std::time::{Duration, Instant};

/// Listening stops on its own after this long.
pub const DICTATION_MAX_DURATION: Duration = Duration::from_secs(30);

/// Host speech-recognition engine.
pub trait DictationSource {
    fn start(&self, continuous: bool);
    fn stop(&self);
}

impl<T: DictationSource + ?Sized> DictationSource for std::rc::Rc<T> {
    fn start(&self, continuous: bool) {
        (**self).start(continuous);
    }

    fn stop(&self) {
        (**self).stop();
    }
}

/// Whether the host can capture speech at all.
pub enum DictationCapability {
    Available(Box<dyn DictationSource>),
    Unavailable,
}

impl DictationCapability {
    /// Starts listening for `label` with the given field semantics.
    ///
    /// Returns `CapabilityError::Unsupported` on hosts without dictation.
    pub fn begin(
        &self,
        label: &str,
        mode: DictationMode,
        field: impl Into<String>,
        started_at: Instant,
    ) -> Result<DictationSession<'_>, CapabilityError> {
        match self {
            Self::Available(source) => {
                source.start(mode == DictationMode::Append);
                Ok(DictationSession {
                    source: source.as_ref(),
                    label: label.to_string(),
                    mode,
                    field: field.into(),
                    interim: None,
                    state: DictationState::Starting,
                    started_at,
                })
            }
            Self::Unavailable => Err(CapabilityError::Unsupported(
                PlatformCapability::Dictation,
            )),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// How final transcripts land in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationMode {
    /// Single utterance replaces the field (note title/content).
    Replace,
    /// Continuous listening appends each utterance (diary body).
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    Started,
    Transcript { text: String, is_final: bool },
    Error,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationState {
    Starting,
    Listening,
    Ended,
}

/// One listening run bound to a host source.
pub struct DictationSession<'src> {
    source: &'src dyn DictationSource,
    label: String,
    mode: DictationMode,
    field: String,
    interim: Option<String>,
    state: DictationState,
    started_at: Instant,
}

impl DictationSession<'_> {
    /// Applies one host event and returns the phrase to announce, if any.
    pub fn apply(&mut self, event: DictationEvent) -> Result<Option<String>, CapabilityError> {
        if self.state == DictationState::Ended {
            return Err(CapabilityError::SessionClosed);
        }

        let announcement = match event {
            DictationEvent::Started => {
                self.state = DictationState::Listening;
                Some(match self.mode {
                    DictationMode::Replace => format!("Speak your {}", self.label),
                    DictationMode::Append => format!("Listening to your {}", self.label),
                })
            }
            DictationEvent::Transcript { text, is_final } => {
                if is_final {
                    self.commit(text.trim());
                    match self.mode {
                        DictationMode::Replace => Some(format!("{} recorded", self.label)),
                        DictationMode::Append => None,
                    }
                } else {
                    self.interim = Some(text);
                    None
                }
            }
            DictationEvent::Error => {
                self.finish();
                Some("Voice input error".to_string())
            }
            DictationEvent::Ended => {
                self.finish();
                None
            }
        };

        Ok(announcement)
    }

    /// Ends the session once the ceiling elapsed. Returns whether it ended now.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state == DictationState::Ended {
            return false;
        }
        if now.saturating_duration_since(self.started_at) < DICTATION_MAX_DURATION {
            return false;
        }
        self.source.stop();
        self.finish();
        true
    }

    /// Explicit stop requested by the user.
    pub fn stop(&mut self) {
        if self.state != DictationState::Ended {
            self.source.stop();
            self.finish();
        }
    }

    /// Current field text, without uncommitted interim words.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Latest non-final transcript, for live preview.
    pub fn interim(&self) -> Option<&str> {
        self.interim.as_deref()
    }

    pub fn state(&self) -> DictationState {
        self.state
    }

    /// Consumes the session and returns the final field text.
    pub fn into_field(self) -> String {
        self.field
    }

    fn commit(&mut self, transcript: &str) {
        self.interim = None;
        if transcript.is_empty() {
            return;
        }
        match self.mode {
            DictationMode::Replace => self.field = transcript.to_string(),
            DictationMode::Append => {
                if !self.field.is_empty() && !self.field.ends_with(' ') {
                    self.field.push(' ');
                }
                self.field.push_str(transcript);
            }
        }
    }

    fn finish(&mut self) {
        self.interim = None;
        self.state = DictationState::Ended;
    }
}
