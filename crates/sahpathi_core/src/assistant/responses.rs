//! Canned reply pools per category.

use super::classifier::ResponseCategory;

/// Greeting shown when the history is empty.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI Study Guide. I'm here to help you with study tips, explain concepts, and provide emotional support. How can I assist you today? 😊";

/// Greeting shown after the history was cleared.
pub const CLEARED_MESSAGE: &str = "Chat cleared! How can I help you? 😊";

/// Shortcut prompts offered next to the input field: `(label, prompt)`.
pub const QUICK_PROMPTS: &[(&str, &str)] = &[
    ("Study Tips", "Give me a study tip"),
    ("Need Support", "I need some encouragement"),
    ("Explain Topic", "Can you explain [topic] in simple terms?"),
];

const STUDY_TIPS: &[&str] = &[
    "Use the Pomodoro Technique: Study for 25 minutes, then take a 5-minute break.",
    "Create mind maps to visualize connections between concepts.",
    "Teach what you learn to someone else - it helps you understand better!",
    "Take regular breaks and stay hydrated while studying.",
    "Use flashcards for memorization - repetition is key!",
    "Study in a quiet, well-lit environment free from distractions.",
    "Break down large topics into smaller, manageable chunks.",
    "Practice active recall by testing yourself regularly.",
];

const EMOTIONAL_SUPPORT: &[&str] = &[
    "You're doing great! Remember, progress is progress no matter how small. 💪",
    "It's okay to feel overwhelmed sometimes. Take a deep breath and tackle one thing at a time. 🌟",
    "You're capable of amazing things! Believe in yourself. ✨",
    "Every expert was once a beginner. Keep learning and growing! 🌱",
    "Your effort matters more than perfection. Keep going! 🎯",
    "Remember to be kind to yourself. You're doing your best! 💖",
];

const MATH: &[&str] = &["For math problems, try breaking them down step by step:\n\n1. Read the problem carefully\n2. Identify what you know and what you need to find\n3. Choose the right formula or method\n4. Solve step by step\n5. Check your answer\n\nWould you like to try a specific problem together?"];

const SCIENCE: &[&str] = &["Science is all about observation and curiosity! Here are some tips:\n\n• Always ask 'why' and 'how'\n• Use diagrams to visualize concepts\n• Connect new concepts to real-life examples\n• Practice explaining concepts in your own words\n\nWhat science topic would you like to explore?"];

const TIME_MANAGEMENT: &[&str] = &["Time management is crucial! Try these strategies:\n\n✓ Use a daily planner or calendar\n✓ Prioritize tasks by importance\n✓ Set realistic goals\n✓ Avoid multitasking\n✓ Take regular breaks\n\nWould you like help creating a study schedule?"];

const MEMORY: &[&str] = &["Here are effective memory techniques:\n\n🧠 Mnemonics - Create acronyms or phrases\n🔄 Spaced repetition - Review regularly\n🖼️ Visual associations - Link info to images\n📝 Write it down - Engages different senses\n🗣️ Teach others - Reinforces learning\n\nWhich technique would you like to try?"];

const EXAM_PREP: &[&str] = &["Exam preparation checklist:\n\n📚 Review all materials 1-2 weeks before\n✍️ Practice with past papers\n👥 Study with friends for discussion\n💤 Get good sleep before the exam\n🍎 Eat a healthy breakfast\n⏰ Arrive early to reduce stress\n\nYou've got this! What subject is your exam?"];

const READING: &[&str] = &["Improve reading comprehension:\n\n1. Preview the text (headings, images)\n2. Ask questions before reading\n3. Highlight key points\n4. Take notes in margins\n5. Summarize each section\n6. Review and reflect\n\nReading actively helps you understand and remember better!"];

const MOTIVATION: &[&str] = &["Remember why you started! 🌟\n\n• Every challenge makes you stronger\n• Mistakes are learning opportunities\n• Your future self will thank you\n• Compare yourself to yesterday, not others\n• Celebrate small wins\n\nYou're capable of more than you think! What's one small thing you can do today?"];

const FOCUS: &[&str] = &["Boost your concentration:\n\n🔕 Turn off notifications\n🎵 Try background music (instrumental)\n🪴 Keep your study space organized\n⏲️ Use timers (Pomodoro technique)\n🧘 Take mindful breaks\n💧 Stay hydrated\n\nWhat usually distracts you the most?"];

const FALLBACK: &[&str] = &[
    "That's an interesting question! Could you tell me more about what you'd like to know?",
    "I'd be happy to help! Can you provide more details about your question?",
    "Great question! What specific aspect would you like me to focus on?",
    "I'm here to support you! Would you like study tips, concept explanations, or encouragement?",
];

/// Motivational lines spoken when a to-do item gets completed.
pub const COMPLETION_QUOTES: &[&str] = &[
    "You're doing great! Keep going! 🌟",
    "Every task completed is a step forward! 💪",
    "Believe in yourself! You've got this! ✨",
    "Small progress is still progress! 🎯",
    "You're making excellent progress today! 🚀",
];

/// Returns the reply pool for a category. Never empty.
pub fn pool(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::StudyTips => STUDY_TIPS,
        ResponseCategory::EmotionalSupport => EMOTIONAL_SUPPORT,
        ResponseCategory::Math => MATH,
        ResponseCategory::Science => SCIENCE,
        ResponseCategory::TimeManagement => TIME_MANAGEMENT,
        ResponseCategory::Memory => MEMORY,
        ResponseCategory::ExamPrep => EXAM_PREP,
        ResponseCategory::Reading => READING,
        ResponseCategory::Motivation => MOTIVATION,
        ResponseCategory::Focus => FOCUS,
        ResponseCategory::Fallback => FALLBACK,
    }
}
