/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionSet, Streak) and
/// the pure calculations over them. Nothing in here touches storage or the
/// system clock: "today" is always handed in by the caller.

pub mod habit;
pub mod completion;
pub mod streak;
pub mod success_rate;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use completion::*;
pub use streak::*;
pub use success_rate::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain validation
///
/// These are all "invalid argument" failures raised at the boundary before
/// any calculation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid habit title: {0}")]
    InvalidTitle(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
