/// Completion date set for a habit
///
/// Holds the calendar days a habit was done on. A day appears at most once;
/// the set is the only state the streak and success-rate calculations read.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Deduplicated set of completion dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet {
    dates: BTreeSet<NaiveDate>,
}

impl CompletionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completion on `date`
    ///
    /// Marking a day that is already present is a no-op. Returns `true` when
    /// the set changed.
    pub fn mark_done(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Flip the completion state of `date`
    ///
    /// Present days are removed, absent days are added. Returns whether the
    /// day is present afterwards.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.dates.remove(&date) {
            false
        } else {
            self.dates.insert(date);
            true
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate dates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
