/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data conversion.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{CompletionSet, Habit, HabitId, NewHabit};
use crate::storage::{migrations, HabitStorage, StorageError};

const HABIT_COLUMNS: &str = "id, title, description, frequency, created_at";

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let storage = Self::initialize(conn)?;
        tracing::info!("SQLite storage initialized at: {}", db_path.display());
        Ok(storage)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, StorageError> {
        // Completion rows rely on ON DELETE CASCADE
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Map a `habits` row to a habit without its completions
    fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
        let id_str: String = row.get(0)?;
        let id = id_str
            .parse::<HabitId>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
        let created_at: DateTime<Utc> = row.get(4)?;

        Ok(Habit::from_existing(
            id,
            row.get(1)?, // title
            row.get(2)?, // description
            row.get(3)?, // frequency
            created_at,
            CompletionSet::new(),
        ))
    }

    fn load_completions(&self, habit_id: &HabitId) -> Result<CompletionSet, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT done_date FROM habit_completions WHERE habit_id = ?1 ORDER BY done_date"
        )?;

        let dates = stmt
            .query_map(params![habit_id.to_string()], |row| row.get::<_, NaiveDate>(0))?
            .collect::<Result<CompletionSet, _>>()?;

        Ok(dates)
    }

    fn insert_completions(conn: &Connection, habit_id: &HabitId, dates: &CompletionSet) -> Result<(), StorageError> {
        let mut stmt = conn.prepare_cached(
            "INSERT INTO habit_completions (habit_id, done_date) VALUES (?1, ?2)"
        )?;

        let id = habit_id.to_string();
        for date in dates.iter() {
            stmt.execute(params![id, date])?;
        }

        Ok(())
    }
}

impl HabitStorage for SqliteStorage {
    fn create_habit(&self, habit: &NewHabit) -> Result<Habit, StorageError> {
        let id = HabitId::new();
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO habits (id, title, description, frequency, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id.to_string(),
                habit.fields.title,
                habit.fields.description,
                habit.fields.frequency,
                habit.created_at,
            ],
        )?;
        Self::insert_completions(&tx, &id, &habit.completed_dates)?;
        tx.commit()?;

        tracing::debug!("Created habit: {} ({})", habit.fields.title, id);
        Ok(habit.clone().into_habit(id))
    }

    fn find_habit(&self, habit_id: &HabitId) -> Result<Option<Habit>, StorageError> {
        let sql = format!("SELECT {} FROM habits WHERE id = ?1", HABIT_COLUMNS);
        let found = self
            .conn
            .query_row(&sql, params![habit_id.to_string()], Self::habit_from_row)
            .optional()?;

        match found {
            Some(mut habit) => {
                habit.completed_dates = self.load_completions(&habit.id)?;
                Ok(Some(habit))
            }
            None => Ok(None),
        }
    }

    /// Rewrite the habit row and its completion rows in one transaction
    fn save_habit(&self, habit: &Habit) -> Result<Habit, StorageError> {
        let tx = self.conn.unchecked_transaction()?;

        let rows_affected = tx.execute(
            "UPDATE habits SET title = ?2, description = ?3, frequency = ?4 WHERE id = ?1",
            params![
                habit.id.to_string(),
                habit.title,
                habit.description,
                habit.frequency,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit.id.to_string(),
            });
        }

        tx.execute(
            "DELETE FROM habit_completions WHERE habit_id = ?1",
            params![habit.id.to_string()],
        )?;
        Self::insert_completions(&tx, &habit.id, &habit.completed_dates)?;
        tx.commit()?;

        tracing::debug!(
            "Saved habit: {} ({}) with {} completions",
            habit.title,
            habit.id,
            habit.completed_dates.len()
        );
        Ok(habit.clone())
    }

    fn habit_exists(&self, habit_id: &HabitId) -> Result<bool, StorageError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM habits WHERE id = ?1)",
            params![habit_id.to_string()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }

    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let sql = format!("SELECT {} FROM habits ORDER BY created_at ASC, rowid ASC", HABIT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;

        let mut habits = stmt
            .query_map([], Self::habit_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for habit in &mut habits {
            habit.completed_dates = self.load_completions(&habit.id)?;
        }

        Ok(habits)
    }
}
