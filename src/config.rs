/// Server configuration
///
/// Resolves where the database lives and which success-rate policy the
/// statistics engine uses.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::SuccessRatePolicy;

/// Database file name inside the data directory
pub const DATABASE_FILE: &str = "habits.db";

/// Settings needed to start the server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub success_rate_policy: SuccessRatePolicy,
}

impl ServerConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            success_rate_policy: SuccessRatePolicy::default(),
        }
    }

    pub fn with_success_rate_policy(mut self, policy: SuccessRatePolicy) -> Self {
        self.success_rate_policy = policy;
        self
    }

    /// Make sure the directory holding the database exists
    pub fn prepare(&self) -> io::Result<()> {
        match self.database_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                std::fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

/// Get the default database path with robust fallback strategy
///
/// Tries the home, data, config and working directories in that order and
/// picks the first one that can be written to. Falls back to the system
/// temporary directory.
pub fn default_database_path() -> io::Result<PathBuf> {
    let candidates = [
        dirs::home_dir().map(|p| p.join(".habit_tracker")),
        dirs::data_dir().map(|p| p.join("habit_tracker")),
        dirs::config_dir().map(|p| p.join("habit_tracker")),
        std::env::current_dir().ok().map(|p| p.join(".habit_tracker")),
    ];

    database_path_in(&candidates, &std::env::temp_dir())
}

/// Pick the database file in the first writable candidate directory
fn database_path_in(candidates: &[Option<PathBuf>], temp_root: &Path) -> io::Result<PathBuf> {
    for dir in candidates.iter().flatten() {
        if is_writable_dir(dir) {
            return Ok(dir.join(DATABASE_FILE));
        }
    }

    let temp_dir = temp_root.join("habit_tracker");
    std::fs::create_dir_all(&temp_dir)?;

    tracing::warn!("Using temporary directory for database: {}", temp_dir.display());
    Ok(temp_dir.join(DATABASE_FILE))
}

/// Create `dir` if needed and check that a file can be written in it
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }

    let probe = dir.join(".test_write");
    if std::fs::write(&probe, "test").is_err() {
        return false;
    }
    let _ = std::fs::remove_file(&probe);
    true
}
