//! Text-to-speech sink.

use std::cell::RefCell;

/// Speaks plain text aloud. Fire-and-forget; no result is reported back.
pub trait Narrator {
    fn speak(&self, text: &str);
}

/// Narrator for hosts without speech output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&self, _text: &str) {}
}

/// Keeps every spoken phrase in order. Useful for host previews and tests.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    spoken: RefCell<Vec<String>>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.spoken.borrow().last().cloned()
    }
}

impl Narrator for RecordingNarrator {
    fn speak(&self, text: &str) {
        self.spoken.borrow_mut().push(text.to_string());
    }
}

impl<T: Narrator + ?Sized> Narrator for std::rc::Rc<T> {
    fn speak(&self, text: &str) {
        (**self).speak(text);
    }
}
