/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a small interface for storing and retrieving habits together with their
/// completion dates.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use crate::domain::{Habit, HabitId, NewHabit};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// This trait allows us to potentially swap out SQLite for other databases
/// in the future while keeping the same interface.
pub trait HabitStorage {
    /// Persist a new habit and assign its id
    fn create_habit(&self, habit: &NewHabit) -> Result<Habit, StorageError>;

    /// Get a habit by ID, `None` if it does not exist
    fn find_habit(&self, habit_id: &HabitId) -> Result<Option<Habit>, StorageError>;

    /// Write back an existing habit, including its completion dates
    fn save_habit(&self, habit: &Habit) -> Result<Habit, StorageError>;

    /// Check whether a habit exists
    fn habit_exists(&self, habit_id: &HabitId) -> Result<bool, StorageError>;

    /// Delete a habit and its completions
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List all habits in creation order
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;
}
