/// Habit entity and related validation
///
/// A habit is an immutable value record: a name, a periodicity and a
/// reference to the owning user. Statistics are never stored on the habit;
/// they are derived from its completion history by the analytics module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId, Periodicity, UserId};

/// Something a user wants to do regularly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub user_id: UserId,
    pub name: String,
    pub periodicity: Periodicity,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a habit record from stored data
    pub fn from_existing(
        id: HabitId,
        user_id: UserId,
        name: String,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            periodicity,
            created_at,
        }
    }

    /// Validate a habit name before it is stored
    ///
    /// Names must contain at least one character that is not a space.
    /// Per-user uniqueness is enforced by the storage layer.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidHabitName(
                "habit name must contain at least one character that is not a space".to_string(),
            ));
        }
        Ok(())
    }
}
