//! Diary mood statistics and cursor bounds.

use crate::model::diary::{DiaryEntry, Mood};

/// Entry count per mood, in mood declaration order, zero counts omitted.
pub fn mood_counts(entries: &[DiaryEntry]) -> Vec<(Mood, usize)> {
    Mood::ALL
        .into_iter()
        .map(|mood| {
            let count = entries.iter().filter(|entry| entry.mood == mood).count();
            (mood, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Clamps a flip-book cursor into `[0, len - 1]`; `None` when empty.
pub fn clamp_cursor(cursor: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(cursor.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_cursor, mood_counts};
    use crate::model::diary::{DiaryEntry, Mood};
    use crate::model::id::new_record_id;

    fn entry(mood: Mood) -> DiaryEntry {
        DiaryEntry {
            id: new_record_id(),
            date: "Monday, January 6, 2025".to_string(),
            mood,
            emoji: mood.emoji().to_string(),
            content: "text".to_string(),
        }
    }

    #[test]
    fn counts_follow_mood_order_and_skip_zero() {
        let entries = vec![entry(Mood::Sad), entry(Mood::Happy), entry(Mood::Sad)];
        assert_eq!(mood_counts(&entries), vec![(Mood::Happy, 1), (Mood::Sad, 2)]);
        assert!(mood_counts(&[]).is_empty());
    }

    #[test]
    fn clamp_keeps_cursor_in_bounds() {
        assert_eq!(clamp_cursor(2, 2), Some(1));
        assert_eq!(clamp_cursor(0, 3), Some(0));
        assert_eq!(clamp_cursor(0, 0), None);
    }
}
