//! In-memory reflection journal.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reflection per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionEntry {
    pub date: NaiveDate,
    pub challenge: String,
    pub reflection: String,
}

/// Session-owned map from date to entry.
///
/// Insert-only within a session: a second submission for the same date
/// replaces the first, nothing is ever removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflectionStore {
    entries: BTreeMap<NaiveDate, ReflectionEntry>,
}

impl ReflectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `reflection` for `date`, overwriting any earlier entry.
    ///
    /// Callers must reject empty reflections before calling this.
    pub fn submit(
        &mut self,
        date: NaiveDate,
        challenge: impl Into<String>,
        reflection: impl Into<String>,
    ) -> &ReflectionEntry {
        let entry = ReflectionEntry {
            date,
            challenge: challenge.into(),
            reflection: reflection.into(),
        };
        if self.entries.insert(date, entry).is_some() {
            tracing::debug!(%date, "replaced existing reflection");
        }
        &self.entries[&date]
    }

    /// Up to `n` entries, newest first.
    pub fn list_recent(&self, n: usize) -> Vec<&ReflectionEntry> {
        self.entries.values().rev().take(n).collect()
    }

    /// Every date that has an entry, in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ReflectionEntry> {
        self.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_same_date_overwrites() {
        let mut store = ReflectionStore::new();
        store.submit(d(2), "challenge A", "first");
        store.submit(d(2), "challenge B", "second");

        assert_eq!(store.len(), 1);
        let entry = store.get(d(2)).unwrap();
        assert_eq!(entry.challenge, "challenge B");
        assert_eq!(entry.reflection, "second");
    }

    #[test]
    fn test_list_recent_is_newest_first_and_truncated() {
        let mut store = ReflectionStore::new();
        for day in [4, 1, 7, 3, 9, 2, 8] {
            store.submit(d(day), "c", format!("day {day}"));
        }

        let recent: Vec<_> = store.list_recent(5).iter().map(|e| e.date).collect();
        assert_eq!(recent, vec![d(9), d(8), d(7), d(4), d(3)]);

        assert_eq!(store.list_recent(0).len(), 0);
        assert_eq!(store.list_recent(100).len(), 7);
    }

    #[test]
    fn test_dates_match_entries() {
        let mut store = ReflectionStore::new();
        assert!(store.is_empty());
        store.submit(d(5), "c", "r");
        store.submit(d(1), "c", "r");
        assert_eq!(store.dates().collect::<Vec<_>>(), vec![d(1), d(5)]);
    }

    #[test]
    fn test_submit_returns_stored_entry() {
        let mut store = ReflectionStore::new();
        let entry = store.submit(d(3), "Try a different approach", "It worked");
        assert_eq!(entry.date, d(3));
        assert_eq!(entry.reflection, "It worked");
    }
}
