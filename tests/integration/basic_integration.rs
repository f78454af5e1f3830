/// Basic integration tests
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use habit_tracker::*;
use tempfile::{tempdir, NamedTempFile};

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn create(storage: &SqliteStorage, title: &str, frequency: Option<u32>) -> HabitDto {
        let created_at = Utc.with_ymd_and_hms(2024, 6, 6, 7, 30, 0).unwrap();
        create_habit(
            storage,
            CreateHabitParams {
                title: title.to_string(),
                description: Some("integration".to_string()),
                frequency,
                completed_dates: None,
            },
            created_at,
        )
        .expect("Failed to create habit")
    }

    #[tokio::test]
    async fn test_server_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let config = ServerConfig::new(temp_file.path())
            .with_success_rate_policy(SuccessRatePolicy::FrequencyWeighted);

        let server = HabitTrackerServer::new(config)
            .await
            .expect("Failed to create server");

        assert_eq!(server.stats_engine().policy(), SuccessRatePolicy::FrequencyWeighted);
        assert!(server.storage().list_habits().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("habits.db");

        HabitTrackerServer::new(ServerConfig::new(&db_path))
            .await
            .expect("Failed to create server");

        assert!(db_path.exists());
    }

    #[test]
    fn test_full_habit_lifecycle() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path()).expect("Failed to create storage");

        let habit = create(&storage, "Meditate", Some(7));

        for offset in 0..3 {
            let date = (today() - Duration::days(offset)).to_string();
            mark_habit_done(
                &storage,
                MarkDoneParams { habit_id: habit.id.clone(), date: Some(date) },
                today(),
            )
            .unwrap();
        }
        toggle_habit_done(
            &storage,
            ToggleParams { habit_id: habit.id.clone(), date: "2024-06-10".to_string() },
        )
        .unwrap();

        // 2024-06-06 through 2024-06-15 is ten days
        let stats = habit_stats(
            &storage,
            &HabitStatsEngine::new(),
            StatsParams { habit_id: habit.id.clone() },
            today(),
        )
        .unwrap();
        assert_eq!(stats.total_done, 4);
        assert_eq!(stats.success_rate, 40.0);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);

        let updated = update_habit(
            &storage,
            UpdateHabitParams {
                habit_id: habit.id.clone(),
                title: "Meditate 10min".to_string(),
                description: None,
                frequency: Some(5),
            },
        )
        .unwrap();
        assert_eq!(updated.title, "Meditate 10min");
        assert_eq!(updated.completed_dates.len(), 4);
        assert_eq!(updated.created_at, habit.created_at);

        let deleted = delete_habit(&storage, DeleteHabitParams { habit_id: habit.id.clone() }).unwrap();
        assert!(deleted.deleted);

        let gone = habit_stats(
            &storage,
            &HabitStatsEngine::new(),
            StatsParams { habit_id: habit.id },
            today(),
        );
        assert!(matches!(gone, Err(ToolError::NotFound { .. })));
    }

    #[test]
    fn test_database_persistence() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("habits.db");

        let habit = {
            let storage = SqliteStorage::new(&db_path).expect("Failed to create first storage");
            let habit = create(&storage, "Read", None);
            mark_habit_done(
                &storage,
                MarkDoneParams { habit_id: habit.id.clone(), date: None },
                today(),
            )
            .unwrap();
            habit
        };

        let storage = SqliteStorage::new(&db_path).expect("Failed to reopen storage");
        let listed = list_habits(&storage, ListHabitsParams::default()).unwrap();

        assert_eq!(listed.total_habits, 1);
        assert_eq!(listed.habits[0].id, habit.id);
        assert_eq!(listed.habits[0].completed_dates, vec![today()]);
    }

    #[test]
    fn test_errors_leave_storage_untouched() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path()).expect("Failed to create storage");
        let habit = create(&storage, "Swim", Some(2));

        let invalid = update_habit(
            &storage,
            UpdateHabitParams {
                habit_id: habit.id.clone(),
                title: String::new(),
                description: None,
                frequency: None,
            },
        );
        assert!(matches!(invalid, Err(ToolError::InvalidArgument(_))));

        let bad_date = toggle_habit_done(
            &storage,
            ToggleParams { habit_id: habit.id.clone(), date: "tomorrow".to_string() },
        );
        assert!(matches!(bad_date, Err(ToolError::InvalidArgument(_))));

        let listed = list_habits(&storage, ListHabitsParams::default()).unwrap();
        assert_eq!(listed.habits, vec![habit]);
    }

    #[test]
    fn test_storage_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path()).expect("Failed to create storage");

        let _: &dyn HabitStorage = &storage;
        assert!(!storage.habit_exists(&HabitId::new()).unwrap());
    }
}
