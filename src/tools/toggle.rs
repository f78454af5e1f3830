/// Tool for toggling a habit's completion on a day
///
/// This module implements the habit_toggle MCP tool. Unlike marking, a
/// toggle flips the day's state on every call.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::parse_date;
use crate::storage::HabitStorage;
use crate::tools::{load_habit, HabitDto, ToolError};

/// Parameters for toggling a completion
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleParams {
    /// ID of the habit
    pub habit_id: String,
    /// Day to toggle (YYYY-MM-DD)
    pub date: String,
}

/// Toggle a completion using the provided storage
pub fn toggle_habit_done<S: HabitStorage>(
    storage: &S,
    params: ToggleParams,
) -> Result<HabitDto, ToolError> {
    let date = parse_date(&params.date)?;
    let mut habit = load_habit(storage, &params.habit_id)?;

    let now_done = habit.toggle(date);
    let saved = storage.save_habit(&habit)?;
    tracing::info!(
        "Toggled habit {} on {}: {}",
        saved.id,
        date,
        if now_done { "done" } else { "not done" }
    );

    Ok(HabitDto::from(saved))
}
