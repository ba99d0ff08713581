//! View models for the four menu modes.
//!
//! Every user interaction builds one [`View`] from the session and today's
//! date; the renderers in [`html`] and [`text`] turn it into output. Views
//! hold plain data, so the same interaction can be shown in a browser or a
//! terminal.

pub mod html;
pub mod text;

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{LearnContent, Quote, LEARN};
use crate::error::CoreError;
use crate::inspiration;
use crate::menu::MenuMode;
use crate::session::{Progress, Session};
use crate::storage::DisplayConfig;

pub const SAVED_MESSAGE: &str = "Reflection saved! Come back tomorrow for a new challenge.";
pub const EMPTY_PROGRESS_MESSAGE: &str =
    "You haven't completed any challenges yet. Check out the Daily Challenge!";
pub const STREAK_CAPTION: &str = "Keep going! Consistency builds growth.";
pub const APP_TITLE: &str = "Growth Mindset Challenge";
pub const WELCOME: &str = "Welcome to your personal Growth Mindset journey! This app will help you develop the belief that your abilities can be developed through dedication and hard work.";

/// Feedback shown above a page after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Warning(String),
    Info(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Info(m) => m,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    /// Heading date, already formatted.
    pub date: String,
    pub challenge: String,
    pub reflection: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Learn {
        content: &'static LearnContent,
    },
    Challenge {
        challenge: String,
        notice: Option<Notice>,
        /// Text to put back in the form after a rejected submission.
        draft: String,
    },
    Progress {
        entries: Vec<EntryView>,
        streak: u32,
    },
    NoProgress {
        notice: Notice,
    },
    Inspiration {
        quote: &'static Quote,
        tips: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub mode: MenuMode,
    pub page: Page,
}

impl View {
    /// The learning page; it reads no session state.
    pub fn learn() -> Self {
        Self {
            mode: MenuMode::Learn,
            page: Page::Learn { content: &LEARN },
        }
    }

    /// The page for `mode` as it stands today.
    pub fn build(mode: MenuMode, session: &mut Session, today: NaiveDate, display: &DisplayConfig) -> Self {
        let page = match mode {
            MenuMode::Learn => return Self::learn(),
            MenuMode::DailyChallenge => Page::Challenge {
                challenge: session.current_challenge(today),
                notice: None,
                draft: String::new(),
            },
            MenuMode::ProgressTracker => {
                progress_page(session.progress(today, display.recent_limit), &display.date_format)
            }
            MenuMode::Inspiration => Page::Inspiration {
                quote: session.quote(),
                tips: inspiration::tips(),
            },
        };
        Self { mode, page }
    }

    /// Submit a reflection and show the challenge page with the outcome.
    ///
    /// A rejected submission keeps the typed text as the form draft.
    pub fn submit(session: &mut Session, today: NaiveDate, reflection: &str) -> Self {
        let (notice, draft) = match session.submit_reflection(today, reflection) {
            Ok(_) => (Notice::Success(SAVED_MESSAGE.to_string()), String::new()),
            // Validation messages are shown bare, without the error-kind prefix.
            Err(CoreError::Validation(err)) => (Notice::Warning(err.to_string()), reflection.to_string()),
            Err(err) => (Notice::Warning(err.to_string()), reflection.to_string()),
        };

        Self {
            mode: MenuMode::DailyChallenge,
            page: Page::Challenge {
                challenge: session.current_challenge(today),
                notice: Some(notice),
                draft,
            },
        }
    }
}

fn progress_page(progress: Progress, date_format: &str) -> Page {
    if progress.recent.is_empty() {
        return Page::NoProgress {
            notice: Notice::Info(EMPTY_PROGRESS_MESSAGE.to_string()),
        };
    }

    let entries = progress
        .recent
        .into_iter()
        .map(|entry| EntryView {
            date: format_date(entry.date, date_format),
            challenge: entry.challenge,
            reflection: entry.reflection,
        })
        .collect();

    Page::Progress {
        entries,
        streak: progress.streak,
    }
}

/// Formats `date` with a user-supplied strftime string, falling back to
/// ISO-8601 when the string has invalid or time-of-day specifiers.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return date.to_string();
    }
    let mut out = String::new();
    if write!(out, "{}", date.format_with_items(items.into_iter())).is_err() {
        return date.to_string();
    }
    out
}
