/// Tool for deleting habits
///
/// This module implements the habit_delete MCP tool. Deletion is permanent
/// and removes the completion history with the habit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::HabitStorage;
use crate::tools::{parse_habit_id, ToolError};

/// Parameters for deleting a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteHabitParams {
    /// ID of the habit to delete
    pub habit_id: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub deleted: bool,
    pub habit_id: String,
}

/// Delete a habit using the provided storage
pub fn delete_habit<S: HabitStorage>(
    storage: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, ToolError> {
    let habit_id = parse_habit_id(&params.habit_id)?;

    if !storage.habit_exists(&habit_id)? {
        return Err(ToolError::NotFound { habit_id: params.habit_id });
    }

    storage.delete_habit(&habit_id)?;
    tracing::info!("Deleted habit {}", habit_id);

    Ok(DeleteHabitResponse {
        deleted: true,
        habit_id: habit_id.to_string(),
    })
}
