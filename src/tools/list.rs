/// Tool for listing all habits
///
/// This module implements the habit_list MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::HabitStorage;
use crate::tools::{HabitDto, ToolError};

/// Parameters for listing habits (none are needed)
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListHabitsParams {}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitDto>,
    pub total_habits: usize,
}

/// List habits using the provided storage
pub fn list_habits<S: HabitStorage>(
    storage: &S,
    _params: ListHabitsParams,
) -> Result<ListHabitsResponse, ToolError> {
    let habits: Vec<HabitDto> = storage
        .list_habits()?
        .iter()
        .map(HabitDto::from)
        .collect();

    Ok(ListHabitsResponse {
        total_habits: habits.len(),
        habits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::*;

    #[test]
    fn test_list_empty() {
        let response = list_habits(&storage(), ListHabitsParams::default()).unwrap();
        assert!(response.habits.is_empty());
        assert_eq!(response.total_habits, 0);
    }

    #[test]
    fn test_list_returns_created_habits() {
        let storage = storage();
        let a = create(&storage, "Floss", 3);
        let b = create(&storage, "Stretch", 1);

        let response = list_habits(&storage, ListHabitsParams::default()).unwrap();
        let ids: Vec<_> = response.habits.iter().map(|h| h.id.clone()).collect();

        assert_eq!(response.total_habits, 2);
        assert_eq!(ids, vec![a.id, b.id]);
    }
}
