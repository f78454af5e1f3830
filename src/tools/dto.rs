/// Data records returned across the tool boundary

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Habit;

/// Plain projection of a habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub frequency: Option<u32>,
    pub created_at: DateTime<Utc>,
    /// Ascending, `YYYY-MM-DD`
    pub completed_dates: Vec<NaiveDate>,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id.to_string(),
            title: habit.title.clone(),
            description: habit.description.clone(),
            frequency: habit.frequency,
            created_at: habit.created_at,
            completed_dates: habit.completed_dates.iter().collect(),
        }
    }
}

impl From<Habit> for HabitDto {
    fn from(habit: Habit) -> Self {
        Self::from(&habit)
    }
}
