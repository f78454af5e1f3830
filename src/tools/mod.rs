/// MCP tools for habit management
///
/// Each tool resolves the habit through [`HabitStorage`], delegates to the
/// domain layer and persists the result. Tools never read the clock: the
/// transport passes "now" in.

use thiserror::Error;

use crate::domain::{DomainError, Habit, HabitId};
use crate::storage::{HabitStorage, StorageError};

pub mod dto;
pub mod create;
pub mod list;
pub mod update;
pub mod delete;
pub mod mark_done;
pub mod toggle;
pub mod stats;

// Re-export tool functions for easy access
pub use dto::*;
pub use create::*;
pub use list::*;
pub use update::*;
pub use delete::*;
pub use mark_done::*;
pub use toggle::*;
pub use stats::*;

/// Errors surfaced by tool calls
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Habit not found: {habit_id}")]
    NotFound { habit_id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] DomainError),

    #[error("Storage failure: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ToolError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::HabitNotFound { habit_id } => ToolError::NotFound { habit_id },
            other => ToolError::Storage(other),
        }
    }
}

/// Parse a client-supplied habit id
///
/// A string that is not a valid id cannot name an existing habit, so it is
/// reported as not found.
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, ToolError> {
    raw.parse::<HabitId>().map_err(|_| ToolError::NotFound {
        habit_id: raw.to_string(),
    })
}

/// Load a habit or fail with `NotFound`
pub(crate) fn load_habit<S: HabitStorage>(storage: &S, raw_id: &str) -> Result<Habit, ToolError> {
    let habit_id = parse_habit_id(raw_id)?;
    storage.find_habit(&habit_id)?.ok_or_else(|| ToolError::NotFound {
        habit_id: raw_id.to_string(),
    })
}
