/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a user's habit
/// they want to track, along with the validated field set used to create and
/// update it.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::{CompletionSet, DomainError, HabitId};

/// A habit represents something the user wants to do regularly
///
/// Each habit has a title, an optional weekly target and the set of
/// calendar days it was completed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, assigned by storage
    pub id: HabitId,
    /// Display title (e.g., "Morning Run", "Read for 30min")
    pub title: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Target completions per week
    pub frequency: Option<u32>,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Days on which the habit was done
    pub completed_dates: CompletionSet,
}

/// The user-editable part of a habit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HabitFields {
    pub title: String,
    pub description: Option<String>,
    pub frequency: Option<u32>,
}

impl HabitFields {
    /// Validate fields according to business rules
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::validate_title(&self.title)?;
        Self::validate_frequency(self.frequency)?;
        Ok(())
    }

    /// Title is free text; only a blank title is rejected
    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidTitle(
                "Habit title cannot be empty".to_string()
            ));
        }

        Ok(())
    }

    /// A target, when given, must be positive
    fn validate_frequency(frequency: Option<u32>) -> Result<(), DomainError> {
        if frequency == Some(0) {
            return Err(DomainError::InvalidFrequency(
                "Frequency must be a positive number of completions per week".to_string()
            ));
        }
        Ok(())
    }
}

/// A validated habit that has not been persisted yet
///
/// Storage turns this into a [`Habit`] by assigning an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHabit {
    pub fields: HabitFields,
    pub created_at: DateTime<Utc>,
    pub completed_dates: CompletionSet,
}

impl NewHabit {
    /// Validate the fields and stamp the creation time
    pub fn new(fields: HabitFields, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        fields.validate()?;
        Ok(Self {
            fields,
            created_at,
            completed_dates: CompletionSet::new(),
        })
    }

    /// Seed the habit with completions recorded before it was created here
    pub fn with_completed_dates<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.completed_dates = dates.into_iter().collect();
        self
    }

    /// Attach the storage-assigned id
    pub fn into_habit(self, id: HabitId) -> Habit {
        Habit {
            id,
            title: self.fields.title,
            description: self.fields.description,
            frequency: self.fields.frequency,
            created_at: self.created_at,
            completed_dates: self.completed_dates,
        }
    }
}

impl Habit {
    /// Create a habit from existing data (used when loading from database)
    ///
    /// This constructor assumes data is already validated.
    pub fn from_existing(
        id: HabitId,
        title: String,
        description: Option<String>,
        frequency: Option<u32>,
        created_at: DateTime<Utc>,
        completed_dates: CompletionSet,
    ) -> Self {
        Self {
            id,
            title,
            description,
            frequency,
            created_at,
            completed_dates,
        }
    }

    /// Replace title, description and frequency
    ///
    /// Completion dates and the creation time are left alone. Nothing is
    /// changed when validation fails.
    pub fn update(&mut self, fields: HabitFields) -> Result<(), DomainError> {
        fields.validate()?;

        self.title = fields.title;
        self.description = fields.description;
        self.frequency = fields.frequency;

        Ok(())
    }

    /// Calendar day the habit was created on
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn mark_done(&mut self, date: NaiveDate) -> bool {
        self.completed_dates.mark_done(date)
    }

    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        self.completed_dates.toggle(date)
    }
}
