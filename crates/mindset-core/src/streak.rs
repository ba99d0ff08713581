//! Consecutive-day streak counting.
//!
//! The streak is yesterday-tolerant: a missing entry for today never breaks
//! it, so a user who reflected every day up to yesterday still sees the full
//! run until today is over. Any other gap ends the streak.

use chrono::{Days, NaiveDate};

/// Counts the current consecutive-day streak from a set of entry dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakCalculator;

impl StreakCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Length of the run of consecutive days ending at `today`, or at
    /// yesterday when `today` has no entry.
    ///
    /// Duplicate dates are counted once. Dates after `today` never match and
    /// stop the walk.
    pub fn compute<I>(&self, dates: I, today: NaiveDate) -> u32
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut sorted: Vec<NaiveDate> = dates.into_iter().collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        let Some(&latest) = sorted.first() else {
            return 0;
        };

        let mut remaining = sorted.as_slice();
        let mut streak = 0;
        if latest == today {
            streak = 1;
            remaining = &remaining[1..];
        }

        let mut cursor = previous_day(today);
        for &date in remaining {
            match cursor {
                Some(expected) if date == expected => {
                    streak += 1;
                    cursor = previous_day(expected);
                }
                _ => break,
            }
        }

        streak
    }
}

/// `None` only at the minimum representable date.
fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}

/// Renders a streak as "1 day" / "N days".
pub fn format_streak(streak: u32) -> String {
    if streak == 1 {
        "1 day".to_string()
    } else {
        format!("{streak} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn jan(days: &[u32]) -> Vec<NaiveDate> {
        days.iter().map(|&day| d(2024, 1, day)).collect()
    }

    #[test]
    fn test_empty_set_is_zero() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(Vec::new(), d(2024, 1, 3)), 0);
    }

    #[test]
    fn test_run_ending_today() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[1, 2, 3]), d(2024, 1, 3)), 3);
    }

    #[test]
    fn test_run_ending_yesterday_is_tolerated() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[1, 2, 3]), d(2024, 1, 4)), 3);
    }

    #[test]
    fn test_run_ending_two_days_ago_is_broken() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[1, 2, 3]), d(2024, 1, 5)), 0);
    }

    #[test]
    fn test_gap_stops_count() {
        let calc = StreakCalculator::new();
        // 1, 2 | gap on 3 | 4, 5
        assert_eq!(calc.compute(jan(&[1, 2, 4, 5]), d(2024, 1, 5)), 2);
        assert_eq!(calc.compute(jan(&[1, 2, 4, 5]), d(2024, 1, 6)), 2);
    }

    #[test]
    fn test_only_today() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[10]), d(2024, 1, 10)), 1);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[2, 5, 3, 4, 1]), d(2024, 1, 5)), 5);
    }

    #[test]
    fn test_duplicates_count_once() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[3, 3, 2, 2]), d(2024, 1, 3)), 2);
    }

    #[test]
    fn test_future_dates_yield_zero() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(jan(&[2, 3, 9]), d(2024, 1, 3)), 0);
    }

    #[test]
    fn test_crosses_month_and_year_boundaries() {
        let calc = StreakCalculator::new();
        let dates = vec![d(2023, 12, 30), d(2023, 12, 31), d(2024, 1, 1)];
        assert_eq!(calc.compute(dates, d(2024, 1, 1)), 3);

        let leap = vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)];
        assert_eq!(calc.compute(leap, d(2024, 3, 2)), 3);
    }

    #[test]
    fn test_minimum_date_does_not_panic() {
        let calc = StreakCalculator::new();
        assert_eq!(calc.compute(vec![NaiveDate::MIN], NaiveDate::MIN), 1);
    }

    #[test]
    fn test_format_streak_pluralisation() {
        assert_eq!(format_streak(0), "0 days");
        assert_eq!(format_streak(1), "1 day");
        assert_eq!(format_streak(7), "7 days");
    }

    proptest! {
        #[test]
        fn contiguous_run_ending_today_counts_every_day(k in 0u64..400, offset in 0i32..3000) {
            let today = d(2020, 1, 1) + chrono::Duration::days(offset as i64);
            let dates: Vec<_> = (0..=k).map(|i| today - Days::new(i)).collect();
            prop_assert_eq!(StreakCalculator::new().compute(dates, today), k as u32 + 1);
        }

        #[test]
        fn contiguous_run_ending_yesterday_counts_every_day(k in 0u64..400) {
            let today = d(2024, 6, 15);
            let dates: Vec<_> = (1..=k + 1).map(|i| today - Days::new(i)).collect();
            prop_assert_eq!(StreakCalculator::new().compute(dates, today), k as u32 + 1);
        }

        #[test]
        fn stale_sets_are_zero(days_ago in proptest::collection::vec(2u64..500, 0..30)) {
            let today = d(2024, 6, 15);
            let dates: Vec<_> = days_ago.iter().map(|&n| today - Days::new(n)).collect();
            prop_assert_eq!(StreakCalculator::new().compute(dates, today), 0);
        }

        #[test]
        fn streak_never_exceeds_distinct_dates(days_ago in proptest::collection::vec(0u64..60, 0..60)) {
            let today = d(2024, 6, 15);
            let dates: Vec<_> = days_ago.iter().map(|&n| today - Days::new(n)).collect();
            let distinct: std::collections::HashSet<_> = dates.iter().copied().collect();
            let streak = StreakCalculator::new().compute(dates, today);
            prop_assert!(streak as usize <= distinct.len());
        }
    }
}
