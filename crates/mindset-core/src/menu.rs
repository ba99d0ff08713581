//! The four display modes offered by the sidebar menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuMode {
    #[default]
    Learn,
    DailyChallenge,
    ProgressTracker,
    Inspiration,
}

impl MenuMode {
    /// Menu order.
    pub const ALL: [MenuMode; 4] = [
        MenuMode::Learn,
        MenuMode::DailyChallenge,
        MenuMode::ProgressTracker,
        MenuMode::Inspiration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuMode::Learn => "Learn About Growth Mindset",
            MenuMode::DailyChallenge => "Daily Challenge",
            MenuMode::ProgressTracker => "Progress Tracker",
            MenuMode::Inspiration => "Inspiration",
        }
    }

    /// URL and command-line identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            MenuMode::Learn => "learn",
            MenuMode::DailyChallenge => "challenge",
            MenuMode::ProgressTracker => "progress",
            MenuMode::Inspiration => "inspiration",
        }
    }

    /// 1-based position in the menu.
    pub fn position(&self) -> usize {
        match self {
            MenuMode::Learn => 1,
            MenuMode::DailyChallenge => 2,
            MenuMode::ProgressTracker => 3,
            MenuMode::Inspiration => 4,
        }
    }
}

impl fmt::Display for MenuMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a slug, a full label, or a 1-based position, ignoring case and
/// surrounding whitespace.
impl FromStr for MenuMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MenuMode::ALL
            .into_iter()
            .find(|mode| {
                needle.eq_ignore_ascii_case(mode.slug())
                    || needle.eq_ignore_ascii_case(mode.label())
                    || needle == mode.position().to_string()
            })
            .ok_or_else(|| ValidationError::UnknownMode(s.to_string()))
    }
}
