/// Public library interface for the habit tracker
///
/// This module wires the layers together and exports the types that the
/// binary and the integration tests use.

use thiserror::Error;

// Internal modules
pub mod analytics;
pub mod commands;
pub mod domain;
pub mod storage;

// Re-export the most used types
pub use analytics::{Extreme, HabitHistory, HabitReport};
pub use domain::{DomainError, Habit, HabitId, Periodicity, User, UserId};
pub use storage::{HabitStore, SqliteStore, StorageError};

/// Errors that can occur during application operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
