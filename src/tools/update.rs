/// Tool for updating existing habits
///
/// This module implements the habit_update MCP tool. An update replaces the
/// title, description and weekly target; completion history is kept.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::HabitFields;
use crate::storage::HabitStorage;
use crate::tools::{load_habit, HabitDto, ToolError};

/// Parameters for updating an existing habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateHabitParams {
    /// ID of the habit to update
    pub habit_id: String,
    /// New title
    pub title: String,
    /// New description; omitted clears it
    pub description: Option<String>,
    /// New weekly target; omitted clears it
    pub frequency: Option<u32>,
}

/// Update an existing habit using the provided storage
pub fn update_habit<S: HabitStorage>(
    storage: &S,
    params: UpdateHabitParams,
) -> Result<HabitDto, ToolError> {
    let mut habit = load_habit(storage, &params.habit_id)?;

    habit.update(HabitFields {
        title: params.title,
        description: params.description,
        frequency: params.frequency,
    })?;

    let saved = storage.save_habit(&habit)?;
    tracing::info!("Updated habit '{}' ({})", saved.title, saved.id);

    Ok(HabitDto::from(saved))
}
