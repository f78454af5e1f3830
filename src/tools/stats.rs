/// Tool for habit statistics
///
/// This module implements the habit_stats MCP tool.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::analytics::{HabitStats, HabitStatsEngine};
use crate::storage::HabitStorage;
use crate::tools::{load_habit, ToolError};

/// Parameters for habit statistics
#[derive(Debug, Deserialize, JsonSchema)]
pub struct StatsParams {
    /// ID of the habit
    pub habit_id: String,
}

/// Compute statistics for one habit as of `today`
pub fn habit_stats<S: HabitStorage>(
    storage: &S,
    engine: &HabitStatsEngine,
    params: StatsParams,
    today: NaiveDate,
) -> Result<HabitStats, ToolError> {
    let habit = load_habit(storage, &params.habit_id)?;
    Ok(engine.compute_stats(&habit, today))
}
