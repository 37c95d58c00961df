//! Keyword classifier for assistant prompts.
//!
//! Categories are tested in declaration order; the first one with any
//! keyword contained in the lower-cased prompt wins.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Response pool selected for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCategory {
    StudyTips,
    EmotionalSupport,
    Math,
    Science,
    TimeManagement,
    Memory,
    ExamPrep,
    Reading,
    Motivation,
    Focus,
    Fallback,
}

/// Keyword-triggered categories in match priority order.
const KEYWORD_RULES: &[(ResponseCategory, &[&str])] = &[
    (ResponseCategory::StudyTips, &["study", "tip", "learn"]),
    (
        ResponseCategory::EmotionalSupport,
        &[
            "stress",
            "anxious",
            "overwhelm",
            "difficult",
            "hard",
            "encourage",
            "sad",
            "help",
        ],
    ),
    (ResponseCategory::Math, &["math", "calculation"]),
    (ResponseCategory::Science, &["science", "experiment"]),
    (
        ResponseCategory::TimeManagement,
        &["time", "schedule", "manage"],
    ),
    (ResponseCategory::Memory, &["memory", "remember", "forget"]),
    (ResponseCategory::ExamPrep, &["exam", "test", "prepare"]),
    (ResponseCategory::Reading, &["read", "book", "comprehension"]),
    (ResponseCategory::Motivation, &["motivat", "inspire", "give up"]),
    (ResponseCategory::Focus, &["focus", "concentrat", "distract"]),
];

static KEYWORD_SET: Lazy<RegexSet> = Lazy::new(|| {
    let patterns = KEYWORD_RULES.iter().map(|(_, keywords)| {
        keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|")
    });
    RegexSet::new(patterns).expect("keyword patterns are escaped literals")
});

/// Classifies a prompt into its response category.
pub fn classify(prompt: &str) -> ResponseCategory {
    let lowered = prompt.to_lowercase();
    KEYWORD_SET
        .matches(&lowered)
        .iter()
        .next()
        .map_or(ResponseCategory::Fallback, |index| KEYWORD_RULES[index].0)
}

#[cfg(test)]
mod tests {
    use super::{classify, ResponseCategory};

    #[test]
    fn classifies_reference_prompts() {
        assert_eq!(classify("I need a study tip"), ResponseCategory::StudyTips);
        assert_eq!(classify("I am so stressed"), ResponseCategory::EmotionalSupport);
        assert_eq!(classify("asdfqwerty"), ResponseCategory::Fallback);
    }

    #[test]
    fn earlier_category_wins_when_several_match() {
        // "learn" (study tips) beats "math".
        assert_eq!(classify("help me learn math"), ResponseCategory::StudyTips);
        // "help" (support) beats "exam".
        assert_eq!(classify("help with my exam"), ResponseCategory::EmotionalSupport);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(classify("SCIENCE fair"), ResponseCategory::Science);
        assert_eq!(classify("I feel unmotivated"), ResponseCategory::Motivation);
        assert_eq!(classify("Can't concentrate"), ResponseCategory::Focus);
        assert_eq!(classify("I want to give up"), ResponseCategory::Motivation);
    }

    #[test]
    fn classification_is_stable_across_calls() {
        for _ in 0..5 {
            assert_eq!(classify("how do I remember dates"), ResponseCategory::Memory);
        }
    }
}
