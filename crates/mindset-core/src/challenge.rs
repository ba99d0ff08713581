//! Daily challenge selection.
//!
//! A session holds at most one active [`ChallengeSelection`]. It is redrawn
//! the first time it is requested on a new calendar day and stays fixed for
//! the rest of that day.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::CHALLENGES;

/// The challenge drawn for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSelection {
    pub date: NaiveDate,
    pub text: String,
}

/// Session-scoped selection state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeState {
    selection: Option<ChallengeSelection>,
}

impl ChallengeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&ChallengeSelection> {
        self.selection.as_ref()
    }
}

/// Picks one prompt per day from a fixed catalog.
#[derive(Debug, Clone, Copy)]
pub struct ChallengePicker {
    catalog: &'static [&'static str],
}

impl ChallengePicker {
    /// Picker over the built-in challenge catalog.
    pub fn new() -> Self {
        Self {
            catalog: CHALLENGES,
        }
    }

    /// Picker over a custom catalog. Returns `None` for an empty catalog.
    pub fn with_catalog(catalog: &'static [&'static str]) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }
        Some(Self { catalog })
    }

    pub fn catalog(&self) -> &'static [&'static str] {
        self.catalog
    }

    /// Today's challenge: the stored one if it was drawn today, otherwise a
    /// fresh uniform draw that replaces it.
    pub fn get_or_refresh<R>(&self, today: NaiveDate, state: &mut ChallengeState, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        if let Some(selection) = &state.selection {
            if selection.date == today {
                return selection.text.clone();
            }
        }

        let text = self
            .catalog
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string();
        tracing::debug!(%today, challenge = %text, "drew new daily challenge");

        state.selection = Some(ChallengeSelection {
            date: today,
            text: text.clone(),
        });
        text
    }
}

impl Default for ChallengePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let picker = ChallengePicker::new();
        let mut state = ChallengeState::new();
        let mut rng = Mcg128Xsl64::seed_from_u64(7);

        let first = picker.get_or_refresh(d(3), &mut state, &mut rng);
        for _ in 0..20 {
            assert_eq!(picker.get_or_refresh(d(3), &mut state, &mut rng), first);
        }
        assert!(CHALLENGES.contains(&first.as_str()));
    }

    #[test]
    fn test_new_day_redraws_and_overwrites() {
        let picker = ChallengePicker::new();
        let mut state = ChallengeState::new();
        let mut rng = Mcg128Xsl64::seed_from_u64(7);

        picker.get_or_refresh(d(3), &mut state, &mut rng);
        picker.get_or_refresh(d(4), &mut state, &mut rng);

        let selection = state.selection().unwrap();
        assert_eq!(selection.date, d(4));
        assert!(CHALLENGES.contains(&selection.text.as_str()));
    }

    #[test]
    fn test_same_seed_same_draw() {
        let picker = ChallengePicker::new();
        let mut a = ChallengeState::new();
        let mut b = ChallengeState::new();

        let first = picker.get_or_refresh(d(1), &mut a, &mut Mcg128Xsl64::seed_from_u64(99));
        let second = picker.get_or_refresh(d(1), &mut b, &mut Mcg128Xsl64::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_entry_catalog_is_deterministic() {
        static ONE: &[&str] = &["Only one"];
        let picker = ChallengePicker::with_catalog(ONE).unwrap();
        let mut state = ChallengeState::new();
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        assert_eq!(picker.get_or_refresh(d(1), &mut state, &mut rng), "Only one");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(ChallengePicker::with_catalog(&[]).is_none());
    }

    #[test]
    fn test_every_prompt_is_reachable() {
        let picker = ChallengePicker::new();
        let mut rng = Mcg128Xsl64::seed_from_u64(2024);
        let mut seen = std::collections::HashSet::new();
        for day in 0..2000u64 {
            let mut state = ChallengeState::new();
            let date = d(1) + chrono::Days::new(day);
            seen.insert(picker.get_or_refresh(date, &mut state, &mut rng));
        }
        assert_eq!(seen.len(), CHALLENGES.len());
    }
}
