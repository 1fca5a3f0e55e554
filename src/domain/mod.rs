/// Domain module containing the core data types
///
/// This module defines the entities of the habit tracker (User, Habit,
/// Completion) and their validation rules. All of them are plain value
/// records; derived statistics live in the analytics module.

pub mod completion;
pub mod habit;
pub mod types;
pub mod user;

// Re-export public types for easy access
pub use completion::*;
pub use habit::*;
pub use types::*;
pub use user::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid username: {0}")]
    InvalidUserName(String),

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid periodicity: {0}")]
    InvalidPeriodicity(String),

    #[error("Cannot check off a habit on a future date: {0}")]
    FutureCompletionDate(chrono::NaiveDate),
}
