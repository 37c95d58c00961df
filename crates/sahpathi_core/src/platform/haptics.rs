//! Vibration feedback.

/// Triggers a vibration pattern (alternating on/off milliseconds).
///
/// Best effort: hosts without a vibration motor simply ignore the call.
pub trait Haptics {
    fn pulse(&self, pattern_ms: &[u32]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _pattern_ms: &[u32]) {}
}

impl<T: Haptics + ?Sized> Haptics for std::rc::Rc<T> {
    fn pulse(&self, pattern_ms: &[u32]) {
        (**self).pulse(pattern_ms);
    }
}

/// Pattern played after adding a task.
pub const TASK_ADDED_PATTERN: &[u32] = &[100];
/// Pattern played after completing a task.
pub const TASK_COMPLETED_PATTERN: &[u32] = &[100, 50, 100];
