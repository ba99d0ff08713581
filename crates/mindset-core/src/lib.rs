//! # Mindset Core Library
//!
//! Business logic for the Growth Mindset Challenge widget: static learning
//! content, a daily challenge, a reflection journal and a streak counter.
//! The `mindset` CLI serves the same logic as a web page or an interactive
//! terminal session.
//!
//! ## Architecture
//!
//! - **Catalog**: fixed prompt, quote, tip and learning content
//! - **Session**: per-user state (challenge selection, reflections, random
//!   source) kept in memory only
//! - **Views**: a view model per menu mode, rendered to HTML or plain text
//! - **Storage**: TOML configuration; reflections are never persisted
//!
//! ## Key Components
//!
//! - [`ChallengePicker`]: one random challenge per calendar day
//! - [`ReflectionStore`]: date-keyed, last-write-wins journal
//! - [`StreakCalculator`]: yesterday-tolerant consecutive-day streak
//! - [`Session`] / [`SessionRegistry`]: isolated session state

pub mod catalog;
pub mod challenge;
pub mod error;
pub mod inspiration;
pub mod menu;
pub mod reflection;
pub mod session;
pub mod storage;
pub mod streak;
pub mod view;

pub use challenge::{ChallengePicker, ChallengeSelection, ChallengeState};
pub use error::{ConfigError, CoreError, ValidationError};
pub use menu::MenuMode;
pub use reflection::{ReflectionEntry, ReflectionStore};
pub use session::{Progress, Session, SessionId, SessionRegistry};
pub use storage::Config;
pub use streak::{format_streak, StreakCalculator};
pub use view::{Notice, Page, View};

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, ValidationError> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidDate {
            value: value.to_string(),
        }
    })
}
