/// User entity and username validation
///
/// A user owns a set of habits. Users are plain value records; the storage
/// layer assigns their ids.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, UserId};

/// An account in the habit tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Create a user record from stored data
    ///
    /// Assumes the name was validated when the user was first created.
    pub fn from_existing(id: UserId, name: String) -> Self {
        Self { id, name }
    }

    /// Validate a username before it is stored
    ///
    /// Usernames must contain at least one character and must not contain
    /// spaces or any of '&', '@', '!'. Uniqueness is enforced by storage.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidUserName(
                "username must contain at least one character".to_string(),
            ));
        }
        if name.contains([' ', '&', '@', '!']) {
            return Err(DomainError::InvalidUserName(
                "username must not contain spaces or '&', '@', '!'".to_string(),
            ));
        }
        Ok(())
    }
}
