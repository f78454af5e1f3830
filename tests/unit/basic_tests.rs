/// Basic unit tests to verify core functionality
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use habit_tracker::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn fields(title: &str, frequency: Option<u32>) -> HabitFields {
        HabitFields {
            title: title.to_string(),
            description: None,
            frequency,
        }
    }

    fn habit_created(created_on: &str, frequency: Option<u32>) -> Habit {
        let created = date(created_on).and_hms_opt(9, 0, 0).unwrap();
        NewHabit::new(fields("Stretch", frequency), Utc.from_utc_datetime(&created))
            .unwrap()
            .into_habit(HabitId::new())
    }

    #[test]
    fn test_habit_creation() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let habit = NewHabit::new(fields("Test Habit", Some(5)), now)
            .unwrap()
            .into_habit(HabitId::new());

        assert_eq!(habit.title, "Test Habit");
        assert_eq!(habit.frequency, Some(5));
        assert!(habit.completed_dates.is_empty());
        assert_eq!(habit.created_on(), date("2024-03-01"));
    }

    #[test]
    fn test_habit_validation() {
        let now = Utc::now();

        assert!(matches!(
            NewHabit::new(fields("   ", None), now),
            Err(DomainError::InvalidTitle(_))
        ));
        assert!(NewHabit::new(fields(&"x".repeat(101), None), now).is_ok());
        assert!(matches!(
            NewHabit::new(fields("Run", Some(0)), now),
            Err(DomainError::InvalidFrequency(_))
        ));
        assert!(NewHabit::new(fields("Run", None), now).is_ok());
    }

    #[test]
    fn test_completion_set_semantics() {
        let mut set = CompletionSet::new();
        let day = date("2024-05-02");

        assert!(set.mark_done(day));
        assert!(!set.mark_done(day));
        assert_eq!(set.len(), 1);

        assert!(!set.toggle(day));
        assert!(set.is_empty());
        assert!(set.toggle(day));
        assert!(set.contains(day));
    }

    #[test]
    fn test_streaks() {
        let today = date("2024-05-10");
        let dates = ["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04", "2024-05-09", "2024-05-10"]
            .iter()
            .map(|d| date(d));

        let streak = Streak::calculate(dates, today);
        assert_eq!(streak.current_streak, 2);
        assert_eq!(streak.longest_streak, 4);
    }

    #[test]
    fn test_streak_broken_when_today_missing() {
        let today = date("2024-05-10");
        let streak = Streak::calculate([date("2024-05-08"), date("2024-05-09")], today);

        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.longest_streak, 2);
    }

    #[test]
    fn test_success_rate_policies() {
        let today = date("2024-06-14");
        let created = today - Duration::days(13);

        let calendar = success_rate(7, created, today, Some(3), SuccessRatePolicy::CalendarDays);
        assert_eq!(calendar, 50.0);

        let weighted = success_rate(3, created, today, Some(3), SuccessRatePolicy::FrequencyWeighted);
        assert!((40.0..=60.0).contains(&weighted));

        let future = success_rate(1, today + Duration::days(1), today, None, SuccessRatePolicy::CalendarDays);
        assert_eq!(future, 0.0);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("calendar".parse::<SuccessRatePolicy>(), Ok(SuccessRatePolicy::CalendarDays));
        assert_eq!("frequency".parse::<SuccessRatePolicy>(), Ok(SuccessRatePolicy::FrequencyWeighted));
        assert!("weekly".parse::<SuccessRatePolicy>().is_err());
    }

    #[test]
    fn test_stats_engine_daily_habit() {
        let today = date("2024-06-14");
        let mut habit = habit_created("2024-06-08", Some(7));
        for offset in 0..7 {
            habit.mark_done(today - Duration::days(offset));
        }

        let stats = HabitStatsEngine::with_policy(SuccessRatePolicy::FrequencyWeighted)
            .compute_stats(&habit, today);

        assert_eq!(stats.total_done, 7);
        assert!(stats.success_rate >= 85.0);
        assert_eq!(stats.current_streak, 7);
        assert_eq!(stats.longest_streak, 7);
    }

    #[test]
    fn test_stats_engine_empty_habit() {
        let today = date("2024-06-14");
        let habit = habit_created("2024-06-01", None);

        let stats = HabitStatsEngine::new().compute_stats(&habit, today);

        assert_eq!(stats.habit_id, habit.id);
        assert_eq!(stats.total_done, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
    }
}
