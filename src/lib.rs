/// Public library interface for the Habit Tracker server
///
/// This module exports the server implementation and the public types
/// that can be used by other applications or tests.

use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod tools;
mod mcp;
mod config;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStorage, SqliteStorage, StorageError};
pub use analytics::{HabitStats, HabitStatsEngine};
pub use tools::{
    create_habit, delete_habit, habit_stats, list_habits, mark_habit_done, toggle_habit_done,
    update_habit, CreateHabitParams, DeleteHabitParams, DeleteHabitResponse, HabitDto,
    ListHabitsParams, ListHabitsResponse, MarkDoneParams, StatsParams, ToggleParams, ToolError,
    UpdateHabitParams,
};
pub use config::{default_database_path, ServerConfig};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main habit tracker server
///
/// Owns the SQLite storage and the statistics engine, and serves the habit
/// tools over MCP on stdin/stdout.
pub struct HabitTrackerServer {
    storage: SqliteStorage,
    engine: HabitStatsEngine,
}

impl HabitTrackerServer {
    /// Create a new habit tracker server from its configuration
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        tracing::info!(
            "Initializing Habit Tracker server with database: {:?} (success rate: {})",
            config.database_path,
            config.success_rate_policy
        );

        config.prepare()?;
        let storage = SqliteStorage::new(&config.database_path)?;
        let engine = HabitStatsEngine::with_policy(config.success_rate_policy);

        Ok(Self::with_storage(storage, engine))
    }

    /// Build a server around already opened storage
    pub fn with_storage(storage: SqliteStorage, engine: HabitStatsEngine) -> Self {
        Self { storage, engine }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin is closed or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        let habits = self.storage.list_habits()?;
        tracing::info!("Server started successfully, found {} existing habits", habits.len());

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await
    }

    /// Get a reference to the storage layer
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Get a reference to the statistics engine
    pub fn stats_engine(&self) -> &HabitStatsEngine {
        &self.engine
    }
}
