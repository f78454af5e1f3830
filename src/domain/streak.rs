/// Streak calculation from completion dates
///
/// A streak is a run of consecutive calendar days that are all present in a
/// habit's completion set. Two figures are derived: the longest run found
/// anywhere in the history, and the current run ending exactly at "today".

use chrono::NaiveDate;

/// Calculated streak information for a habit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak {
    /// Consecutive completed days counted backward from today
    pub current_streak: u32,
    /// Best run of consecutive completed days ever achieved
    pub longest_streak: u32,
}

impl Streak {
    /// Calculate both streak figures from an unordered collection of dates
    ///
    /// Duplicates are tolerated. The current streak is anchored to `today`:
    /// a habit done yesterday but not yet today has a current streak of 0,
    /// even though the run itself still counts toward the longest streak.
    pub fn calculate<I>(dates: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut sorted: Vec<NaiveDate> = dates.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        Self {
            current_streak: Self::current_streak(&sorted, today),
            longest_streak: Self::longest_streak(&sorted),
        }
    }

    /// Longest run of consecutive days in an ascending, deduplicated slice
    fn longest_streak(sorted: &[NaiveDate]) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for &date in sorted {
            run = match previous {
                Some(prev) if prev.succ_opt() == Some(date) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(date);
        }

        longest
    }

    /// Walk backward from `today` until the first missing day
    fn current_streak(sorted: &[NaiveDate], today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut cursor = today;

        while sorted.binary_search(&cursor).is_ok() {
            streak += 1;
            match cursor.pred_opt() {
                Some(prev) => cursor = prev,
                None => break,
            }
        }

        streak
    }
}
