//! Explicit per-session context handed to every module service.
//!
//! # Responsibility
//! - Bundle settings with the host collaborators (narration, haptics,
//!   dictation, clock, randomness) chosen at composition time.
//! - Centralize the voice-gating rule for narration.
//!
//! # Invariants
//! - Action narration only happens when `settings.voice_enabled` is set.
//! - Advisories (validation, unsupported capability) are always spoken.

use crate::platform::{
    CapabilityError, Clock, DictationCapability, DictationMode, DictationSession, Haptics,
    Narrator, NoHaptics, SilentNarrator, SystemClock,
};
use crate::settings::AccessibilitySettings;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::time::Instant;

pub struct AppContext {
    pub settings: AccessibilitySettings,
    narrator: Box<dyn Narrator>,
    haptics: Box<dyn Haptics>,
    dictation: DictationCapability,
    clock: Box<dyn Clock>,
    rng: RefCell<Box<dyn RngCore>>,
}

impl AppContext {
    /// Context with silent, capability-free defaults and the system clock.
    pub fn new(settings: AccessibilitySettings) -> Self {
        Self {
            settings,
            narrator: Box::new(SilentNarrator),
            haptics: Box::new(NoHaptics),
            dictation: DictationCapability::Unavailable,
            clock: Box::new(SystemClock),
            rng: RefCell::new(Box::new(StdRng::from_entropy())),
        }
    }

    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Box::new(narrator);
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn with_dictation(mut self, dictation: DictationCapability) -> Self {
        self.dictation = dictation;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the random source, e.g. with a seeded `StdRng` in tests.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = RefCell::new(Box::new(rng));
        self
    }

    /// Speaks an action confirmation when voice is enabled.
    pub fn announce(&self, text: &str) {
        if self.settings.voice_enabled {
            self.narrator.speak(text);
        }
    }

    /// Speaks an advisory regardless of the voice toggle.
    pub fn advise(&self, text: &str) {
        info!("event=advisory module=context status=shown");
        self.narrator.speak(text);
    }

    pub fn pulse(&self, pattern_ms: &[u32]) {
        self.haptics.pulse(pattern_ms);
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Runs `f` with exclusive access to the random source.
    pub fn with_random<R>(&self, f: impl FnOnce(&mut dyn RngCore) -> R) -> R {
        let mut rng = self.rng.borrow_mut();
        f(&mut **rng)
    }

    pub fn dictation(&self) -> &DictationCapability {
        &self.dictation
    }

    /// Starts dictation into `field`, advising the user when unsupported.
    pub fn begin_dictation(
        &self,
        label: &str,
        mode: DictationMode,
        field: impl Into<String>,
        now: Instant,
    ) -> Result<DictationSession<'_>, CapabilityError> {
        self.dictation
            .begin(label, mode, field, now)
            .inspect_err(|err| self.advise(err.advisory()))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AccessibilitySettings::default())
    }
}
