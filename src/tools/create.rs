/// Tool for creating new habits
///
/// This module implements the habit_create MCP tool.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::{parse_date, HabitFields, NewHabit};
use crate::storage::HabitStorage;
use crate::tools::{HabitDto, ToolError};

/// Parameters for creating a new habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateHabitParams {
    /// Title of the habit
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Target completions per week
    pub frequency: Option<u32>,
    /// Days already completed, as YYYY-MM-DD
    pub completed_dates: Option<Vec<String>>,
}

/// Create a new habit using the provided storage
pub fn create_habit<S: HabitStorage>(
    storage: &S,
    params: CreateHabitParams,
    now: DateTime<Utc>,
) -> Result<HabitDto, ToolError> {
    let completed_dates = params
        .completed_dates
        .unwrap_or_default()
        .iter()
        .map(|raw| parse_date(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let new_habit = NewHabit::new(
        HabitFields {
            title: params.title,
            description: params.description,
            frequency: params.frequency,
        },
        now,
    )?
    .with_completed_dates(completed_dates);

    let habit = storage.create_habit(&new_habit)?;
    tracing::info!("Created habit '{}' ({})", habit.title, habit.id);

    Ok(HabitDto::from(habit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::tools::test_support::*;

    #[test]
    fn test_create_habit() {
        let storage = storage();
        let params = CreateHabitParams {
            title: "  Meditate ".to_string(),
            description: Some("Ten minutes".to_string()),
            frequency: Some(7),
            completed_dates: Some(vec![
                "2024-06-14".to_string(),
                "2024-06-13".to_string(),
                "2024-06-14".to_string(),
            ]),
        };

        let dto = create_habit(&storage, params, now()).unwrap();

        assert_eq!(dto.title, "  Meditate ");
        assert_eq!(dto.frequency, Some(7));
        assert_eq!(dto.created_at, now());
        assert_eq!(dto.completed_dates, vec![days_ago(2), days_ago(1)]);

        let stored = storage.find_habit(&dto.id.parse().unwrap()).unwrap().unwrap();
        assert_eq!(HabitDto::from(stored), dto);
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let storage = storage();
        let params = CreateHabitParams {
            title: "".to_string(),
            description: None,
            frequency: Some(1),
            completed_dates: None,
        };

        let result = create_habit(&storage, params, now());
        assert!(matches!(
            result,
            Err(ToolError::InvalidArgument(DomainError::InvalidTitle(_)))
        ));
        assert!(storage.list_habits().unwrap().is_empty());
    }

    #[test]
    fn test_create_accepts_long_free_text() {
        let storage = storage();
        let params = CreateHabitParams {
            title: "x".repeat(101),
            description: Some("d".repeat(501)),
            frequency: None,
            completed_dates: None,
        };

        let dto = create_habit(&storage, params, now()).unwrap();
        assert_eq!(dto.title, "x".repeat(101));
        assert_eq!(dto.description, Some("d".repeat(501)));
    }

    #[test]
    fn test_create_rejects_malformed_date() {
        let storage = storage();
        let params = CreateHabitParams {
            title: "Run".to_string(),
            description: None,
            frequency: None,
            completed_dates: Some(vec!["yesterday".to_string()]),
        };

        let result = create_habit(&storage, params, now());
        assert!(matches!(
            result,
            Err(ToolError::InvalidArgument(DomainError::InvalidDate(_)))
        ));
    }
}
