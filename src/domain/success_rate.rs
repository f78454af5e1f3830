/// Success rate since habit creation
///
/// The canonical rate is the share of calendar days, creation day and today
/// both included, on which the habit was done. A frequency-weighted variant
/// measures completions against the weekly target instead; which one a server
/// uses is fixed by configuration.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// How the success rate denominator is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuccessRatePolicy {
    /// Completions divided by lifetime days; frequency is ignored
    #[default]
    CalendarDays,
    /// Completions divided by `lifetime_days / 7 * frequency`
    FrequencyWeighted,
}

impl fmt::Display for SuccessRatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccessRatePolicy::CalendarDays => f.write_str("calendar"),
            SuccessRatePolicy::FrequencyWeighted => f.write_str("frequency"),
        }
    }
}

impl FromStr for SuccessRatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calendar" | "calendar_days" => Ok(SuccessRatePolicy::CalendarDays),
            "frequency" | "frequency_weighted" => Ok(SuccessRatePolicy::FrequencyWeighted),
            other => Err(format!(
                "Invalid success rate policy '{}'. Valid options: calendar, frequency",
                other
            )),
        }
    }
}

/// Inclusive day count from `created_on` to `today`
///
/// Zero or negative when the habit was created after `today`.
pub fn lifetime_days(created_on: NaiveDate, today: NaiveDate) -> i64 {
    (today - created_on).num_days() + 1
}

/// Success rate as a percentage, not clamped at 100
pub fn success_rate(
    total_done: usize,
    created_on: NaiveDate,
    today: NaiveDate,
    frequency: Option<u32>,
    policy: SuccessRatePolicy,
) -> f64 {
    let lifetime = lifetime_days(created_on, today);
    if lifetime <= 0 {
        return 0.0;
    }

    let expected = match (policy, frequency) {
        (SuccessRatePolicy::FrequencyWeighted, Some(per_week)) if per_week > 0 => {
            lifetime as f64 / 7.0 * per_week as f64
        }
        // No usable target: fall back to one completion per calendar day
        _ => lifetime as f64,
    };

    total_done as f64 * 100.0 / expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_lifetime_is_inclusive() {
        assert_eq!(lifetime_days(today(), today()), 1);
        assert_eq!(lifetime_days(today() - Duration::days(5), today()), 6);
    }

    #[test]
    fn test_calendar_rate() {
        let created = today() - Duration::days(5);
        let rate = success_rate(3, created, today(), Some(1), SuccessRatePolicy::CalendarDays);
        assert_eq!(rate, 50.0);
    }

    #[test]
    fn test_calendar_rate_ignores_frequency() {
        let created = today() - Duration::days(9);
        let a = success_rate(5, created, today(), Some(1), SuccessRatePolicy::CalendarDays);
        let b = success_rate(5, created, today(), Some(7), SuccessRatePolicy::CalendarDays);
        assert_eq!(a, b);
        assert_eq!(a, 50.0);
    }

    #[test]
    fn test_created_after_today_is_zero() {
        let created = today() + Duration::days(3);
        let rate = success_rate(2, created, today(), None, SuccessRatePolicy::CalendarDays);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_frequency_weighted_three_per_week() {
        let created = today() - Duration::days(14);
        let rate = success_rate(3, created, today(), Some(3), SuccessRatePolicy::FrequencyWeighted);
        assert!(rate > 40.0 && rate < 60.0, "rate was {}", rate);
    }

    #[test]
    fn test_frequency_weighted_daily_target() {
        let created = today() - Duration::days(7);
        let rate = success_rate(7, created, today(), Some(7), SuccessRatePolicy::FrequencyWeighted);
        assert!(rate >= 85.0, "rate was {}", rate);
    }

    #[test]
    fn test_frequency_weighted_without_target_uses_calendar_days() {
        let created = today() - Duration::days(5);
        for frequency in [None, Some(0)] {
            let rate = success_rate(3, created, today(), frequency, SuccessRatePolicy::FrequencyWeighted);
            assert_eq!(rate, 50.0);
        }
    }

    #[test]
    fn test_rate_is_not_clamped() {
        let rate = success_rate(4, today(), today(), None, SuccessRatePolicy::CalendarDays);
        assert_eq!(rate, 400.0);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("calendar".parse::<SuccessRatePolicy>(), Ok(SuccessRatePolicy::CalendarDays));
        assert_eq!("Frequency".parse::<SuccessRatePolicy>(), Ok(SuccessRatePolicy::FrequencyWeighted));
        assert!("weekly".parse::<SuccessRatePolicy>().is_err());
        assert_eq!(SuccessRatePolicy::default().to_string(), "calendar");
    }
}
