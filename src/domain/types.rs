/// Core identifier and date helpers used throughout the domain layer

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Wire format for calendar dates crossing the API boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety. Ids are handed out
/// by the storage layer when a habit is first persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for HabitId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// Only the zero-padded ten character form is accepted. chrono alone would
/// also take "2024-6-5", a leading sign or surrounding whitespace.
pub fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    let invalid = || DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", input));

    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}
