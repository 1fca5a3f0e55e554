/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving users, habits and
/// completions.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::{Completion, Habit, HabitId, Periodicity, User, UserId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("User not found: {name}")]
    UserNotFound { name: String },

    #[error("User already exists: {name}")]
    DuplicateUser { name: String },

    #[error("Habit not found: {name}")]
    HabitNotFound { name: String },

    #[error("Habit already exists: {name}")]
    DuplicateHabit { name: String },
}

/// Trait defining the storage interface
///
/// Commands and the analytics pipeline depend on this trait rather than on
/// SQLite directly, so tests can substitute storage and the backend could
/// be swapped without touching callers.
pub trait HabitStore {
    /// Store a new user; the name must be unique
    fn create_user(&self, name: &str) -> Result<User, StorageError>;

    /// Look up a user by name
    fn find_user(&self, name: &str) -> Result<User, StorageError>;

    /// All known users, ordered by name
    fn list_users(&self) -> Result<Vec<User>, StorageError>;

    /// Store a new habit for a user; names are unique per user
    fn create_habit(
        &self,
        user_id: UserId,
        name: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<Habit, StorageError>;

    /// Look up one of a user's habits by name
    fn find_habit(&self, user_id: UserId, name: &str) -> Result<Habit, StorageError>;

    /// All habits of a user, ordered by creation time
    fn habits_for_user(&self, user_id: UserId) -> Result<Vec<Habit>, StorageError>;

    /// Rename a habit, keeping its completion history
    fn rename_habit(&self, habit_id: HabitId, new_name: &str) -> Result<(), StorageError>;

    /// Change a habit's periodicity, keeping its completion history
    fn change_periodicity(
        &self,
        habit_id: HabitId,
        periodicity: Periodicity,
    ) -> Result<(), StorageError>;

    /// Delete a habit and, via cascade, its completions
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError>;

    /// Record a completion of a habit
    fn add_completion(&self, completion: &Completion) -> Result<(), StorageError>;

    /// The unordered completion dates of a habit, duplicates included
    fn completion_dates(&self, habit_id: HabitId) -> Result<Vec<NaiveDate>, StorageError>;

    /// The timestamp of the most recent completion, for display
    fn last_completion(&self, habit_id: HabitId) -> Result<Option<DateTime<Utc>>, StorageError>;
}
