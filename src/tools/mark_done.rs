/// Tool for marking a habit as done
///
/// This module implements the habit_mark_done MCP tool. Marking the same day
/// twice leaves the habit unchanged.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::parse_date;
use crate::storage::HabitStorage;
use crate::tools::{load_habit, HabitDto, ToolError};

/// Parameters for marking a habit done
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MarkDoneParams {
    /// ID of the habit
    pub habit_id: String,
    /// Day completed (YYYY-MM-DD, optional - defaults to today)
    pub date: Option<String>,
}

/// Record a completion using the provided storage
pub fn mark_habit_done<S: HabitStorage>(
    storage: &S,
    params: MarkDoneParams,
    today: NaiveDate,
) -> Result<HabitDto, ToolError> {
    let date = match params.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => today,
    };

    let mut habit = load_habit(storage, &params.habit_id)?;

    if !habit.mark_done(date) {
        tracing::debug!("Habit {} already marked done on {}", habit.id, date);
        return Ok(HabitDto::from(habit));
    }

    let saved = storage.save_habit(&habit)?;
    tracing::info!("Marked habit {} done on {}", saved.id, date);

    Ok(HabitDto::from(saved))
}
