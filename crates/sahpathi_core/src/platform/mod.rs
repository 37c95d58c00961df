//! Host platform capabilities consumed by core.
//!
//! # Responsibility
//! - Model narration, dictation, haptics and wall-clock access as traits or
//!   available/unavailable variants.
//! - Keep feature detection on the host side; core only sees the variant.
//!
//! # Invariants
//! - Narration and haptics are fire-and-forget and never fail a mutation.
//! - An unavailable capability yields an advisory, never a panic.

pub mod capability;
pub mod clock;
pub mod dictation;
pub mod haptics;
pub mod narration;

pub use capability::{CapabilityError, PlatformCapability};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dictation::{
    DictationCapability, DictationEvent, DictationMode, DictationSession, DictationSource,
    DictationState, DICTATION_MAX_DURATION,
};
pub use haptics::{Haptics, NoHaptics};
pub use narration::{Narrator, RecordingNarrator, SilentNarrator};
