//! Daily challenges, inspirational quotes and tips.

use serde::Serialize;

/// Daily challenge prompts.
pub const CHALLENGES: &[&str] = &[
    "Learn something new outside your comfort zone today.",
    "Identify a recent mistake and write down what you learned from it.",
    "Ask a colleague or friend for constructive feedback on your work.",
    "When faced with a challenge today, say 'I can't do this YET' instead of 'I can't do this'.",
    "Help someone else learn something you're good at.",
    "Try a different approach to a problem you've been working on.",
    "List three things that were difficult for you in the past but are easy now.",
    "Spend 15 minutes practicing a skill you want to improve.",
    "Find an example of someone who succeeded through persistence and learn their story.",
    "Write down three ways you've grown in the past year.",
];

/// An attributed quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    /// Stable short identifier
    pub key: &'static str,
}

impl Quote {
    const fn new(text: &'static str, author: &'static str, key: &'static str) -> Self {
        Self { text, author, key }
    }

    /// "text - author", the way quotes are displayed.
    pub fn attributed(&self) -> String {
        format!("{} - {}", self.text, self.author)
    }
}

pub const QUOTES: &[Quote] = &[
    Quote::new(
        "The hand you are dealt is just the starting point for development.",
        "Carol Dweck",
        "dweck",
    ),
    Quote::new(
        "It's not that I'm so smart, it's just that I stay with problems longer.",
        "Albert Einstein",
        "einstein",
    ),
    Quote::new(
        "Success is no accident. It is hard work, perseverance, learning, sacrifice and most of all, love of what you are doing.",
        "Pelé",
        "pele",
    ),
    Quote::new(
        "I haven't failed. I've just found 10,000 ways that won't work.",
        "Thomas Edison",
        "edison",
    ),
    Quote::new(
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
        "roosevelt",
    ),
    Quote::new(
        "You don't have to be great to start, but you have to start to be great.",
        "Zig Ziglar",
        "ziglar",
    ),
    Quote::new(
        "The expert in anything was once a beginner.",
        "Helen Hayes",
        "hayes",
    ),
    Quote::new(
        "Perseverance is failing 19 times and succeeding the 20th.",
        "Julie Andrews",
        "andrews",
    ),
    Quote::new(
        "The only way to discover the limits of the possible is to go beyond them into the impossible.",
        "Arthur C. Clarke",
        "clarke",
    ),
    Quote::new(
        "Continuous effort - not strength or intelligence - is the key to unlocking our potential.",
        "Winston Churchill",
        "churchill",
    ),
];

pub const TIPS: &[&str] = &[
    "Replace 'I'm not good at this' with 'I'm not good at this yet'",
    "View challenges as opportunities rather than obstacles",
    "Celebrate small improvements - progress is progress",
    "When you make a mistake, ask 'What can I learn from this?'",
    "Compare yourself to who you were yesterday, not to others",
    "Focus on the process rather than just the end result",
    "Reward effort and strategy, not just natural talent",
    "See criticism as valuable feedback for improvement",
    "Surround yourself with others who have a growth mindset",
    "Remember that even experts were once beginners",
];
