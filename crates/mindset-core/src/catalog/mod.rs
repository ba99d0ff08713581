//! Fixed content catalogs.
//!
//! Every catalog is a hardcoded, ordered, non-empty list. Random picks over
//! them therefore never fail.

mod learn;
mod prompts;

pub use learn::{LearnContent, MindsetColumn, Section, FOOTER_QUOTE, LEARN};
pub use prompts::{Quote, CHALLENGES, QUOTES, TIPS};
