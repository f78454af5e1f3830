/// Statistics engine for habits
///
/// This module composes the completion set, streak and success-rate
/// calculations into the stats record returned to clients. The engine works
/// on a habit that has already been loaded; it never touches storage.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{success_rate, Habit, HabitId, Streak, SuccessRatePolicy};

/// Derived statistics for one habit
///
/// Recomputed on every query and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub habit_id: HabitId,
    /// Number of days the habit was completed
    pub total_done: u32,
    /// Percentage, 0 to 100 in well-formed usage
    pub success_rate: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Engine for computing habit statistics
#[derive(Debug, Clone, Default)]
pub struct HabitStatsEngine {
    policy: SuccessRatePolicy,
}

impl HabitStatsEngine {
    /// Create an engine using the calendar-day success rate
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SuccessRatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SuccessRatePolicy {
        self.policy
    }

    /// Compute statistics for `habit` as of `today`
    pub fn compute_stats(&self, habit: &Habit, today: NaiveDate) -> HabitStats {
        let total_done = habit.completed_dates.len();
        let rate = success_rate(
            total_done,
            habit.created_on(),
            today,
            habit.frequency,
            self.policy,
        );
        let streak = Streak::calculate(habit.completed_dates.iter(), today);

        HabitStats {
            habit_id: habit.id.clone(),
            total_done: total_done as u32,
            success_rate: rate,
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
        }
    }
}
