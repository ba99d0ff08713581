//! Static "Learn About Growth Mindset" content.

use serde::Serialize;

/// Trait list for one side of the fixed/growth comparison.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MindsetColumn {
    pub name: &'static str,
    pub belief: &'static str,
    pub traits: &'static [&'static str],
}

/// A titled list of `(term, detail)` pairs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LearnContent {
    pub heading: &'static str,
    pub definition: &'static str,
    pub comparison_title: &'static str,
    pub fixed: MindsetColumn,
    pub growth: MindsetColumn,
    pub why: Section,
    /// Rendered as a numbered list.
    pub practice: Section,
}

/// Quote shown below every page.
pub const FOOTER_QUOTE: (&str, &str) = ("Becoming is better than being.", "Carol Dweck");

pub const LEARN: LearnContent = LearnContent {
    heading: "What is a Growth Mindset?",
    definition: indoc::indoc! {"
        A growth mindset is the belief that your abilities and intelligence can be developed through
        hard work, perseverance, and learning from your mistakes.
    "},
    comparison_title: "Fixed Mindset vs Growth Mindset",
    fixed: MindsetColumn {
        name: "Fixed Mindset",
        belief: "Believes intelligence is static",
        traits: &[
            "Avoids challenges",
            "Gives up easily",
            "Sees effort as fruitless",
            "Ignores useful feedback",
            "Feels threatened by others' success",
        ],
    },
    growth: MindsetColumn {
        name: "Growth Mindset",
        belief: "Believes intelligence can be developed",
        traits: &[
            "Embraces challenges",
            "Persists in setbacks",
            "Sees effort as path to mastery",
            "Learns from criticism",
            "Finds lessons and inspiration in others' success",
        ],
    },
    why: Section {
        title: "Why Adopt a Growth Mindset?",
        items: &[
            ("Embrace Challenges", "View obstacles as opportunities to learn"),
            ("Learn from Mistakes", "Each error is a chance to improve"),
            ("Persist Through Difficulties", "Hard work leads to growth"),
            ("Celebrate Effort", "Reward the process, not just results"),
            ("Keep an Open Mind", "Stay curious and adaptable"),
        ],
    },
    practice: Section {
        title: "How to Practice a Growth Mindset",
        items: &[
            ("Set Learning Goals", "Focus on developing new skills"),
            ("Reflect Regularly", "Learn from both successes and challenges"),
            ("Seek Feedback", "Use criticism as a tool for improvement"),
            ("Stay Positive", "Believe in your capacity to grow"),
        ],
    },
};
