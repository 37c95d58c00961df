//! Process-wide accessibility settings.
//!
//! # Responsibility
//! - Hold the voice, font, contrast and text-size toggles injected into every
//!   module through `AppContext`.
//! - Return the phrase to announce for each toggle.
//!
//! # Invariants
//! - `text_size` stays within `[MIN_TEXT_SIZE, MAX_TEXT_SIZE]`.

use serde::{Deserialize, Serialize};

pub const MIN_TEXT_SIZE: u8 = 12;
pub const MAX_TEXT_SIZE: u8 = 24;
pub const DEFAULT_TEXT_SIZE: u8 = 16;
const TEXT_SIZE_STEP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Gates action narration. Advisories are spoken regardless.
    pub voice_enabled: bool,
    pub dyslexic_font: bool,
    pub high_contrast: bool,
    /// Base font size in pixels.
    pub text_size: u8,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            voice_enabled: false,
            dyslexic_font: false,
            high_contrast: false,
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

impl AccessibilitySettings {
    pub fn toggle_voice(&mut self) -> &'static str {
        self.voice_enabled = !self.voice_enabled;
        if self.voice_enabled {
            "Voice enabled"
        } else {
            "Voice disabled"
        }
    }

    pub fn toggle_dyslexic_font(&mut self) -> &'static str {
        self.dyslexic_font = !self.dyslexic_font;
        if self.dyslexic_font {
            "Dyslexic friendly font"
        } else {
            "Regular font"
        }
    }

    pub fn toggle_high_contrast(&mut self) -> &'static str {
        self.high_contrast = !self.high_contrast;
        if self.high_contrast {
            "High contrast"
        } else {
            "Normal contrast"
        }
    }

    pub fn increase_text_size(&mut self) -> &'static str {
        self.text_size = self
            .text_size
            .saturating_add(TEXT_SIZE_STEP)
            .min(MAX_TEXT_SIZE);
        "Text larger"
    }

    pub fn decrease_text_size(&mut self) -> &'static str {
        self.text_size = self
            .text_size
            .saturating_sub(TEXT_SIZE_STEP)
            .max(MIN_TEXT_SIZE);
        "Text smaller"
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessibilitySettings, MAX_TEXT_SIZE, MIN_TEXT_SIZE};

    #[test]
    fn text_size_is_clamped_in_both_directions() {
        let mut settings = AccessibilitySettings::default();
        for _ in 0..10 {
            settings.increase_text_size();
        }
        assert_eq!(settings.text_size, MAX_TEXT_SIZE);

        for _ in 0..10 {
            settings.decrease_text_size();
        }
        assert_eq!(settings.text_size, MIN_TEXT_SIZE);
    }

    #[test]
    fn toggles_report_new_state() {
        let mut settings = AccessibilitySettings::default();
        assert_eq!(settings.toggle_voice(), "Voice enabled");
        assert!(settings.voice_enabled);
        assert_eq!(settings.toggle_voice(), "Voice disabled");
        assert_eq!(settings.toggle_high_contrast(), "High contrast");
        assert_eq!(settings.toggle_dyslexic_font(), "Dyslexic friendly font");
    }
}
