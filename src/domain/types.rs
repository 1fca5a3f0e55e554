/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like Periodicity and the ID
/// newtypes that are used by User, Habit and Completion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Unique identifier for a user
///
/// A wrapper around the SQLite row id to provide type safety - you can't
/// accidentally pass a user id where a habit id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How often a habit is supposed to be performed
///
/// The periodicity determines which period bucket a completion date falls
/// into and how large the gap between two active periods may grow before a
/// break is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Periodicity {
    /// All periodicities in ascending period-length order
    ///
    /// Listings group habits by periodicity in exactly this order.
    pub const ALL: [Periodicity; 4] = [
        Periodicity::Daily,
        Periodicity::Weekly,
        Periodicity::Monthly,
        Periodicity::Yearly,
    ];

    /// The canonical lowercase name, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Monthly => "monthly",
            Periodicity::Yearly => "yearly",
        }
    }

    /// Whether a completion rate is defined for this periodicity
    ///
    /// The rate looks at a four-week window, which is meaningless for
    /// habits that recur monthly or yearly.
    pub fn has_completion_rate(&self) -> bool {
        matches!(self, Periodicity::Daily | Periodicity::Weekly)
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            "monthly" => Ok(Periodicity::Monthly),
            "yearly" => Ok(Periodicity::Yearly),
            other => Err(DomainError::InvalidPeriodicity(other.to_string())),
        }
    }
}
