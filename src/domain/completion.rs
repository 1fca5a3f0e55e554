/// Completion records
///
/// A completion marks a habit as done on a calendar date. The exact
/// timestamp is kept for display only; the analysis works on dates, and
/// several completions on the same period collapse to one period start.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::HabitId;

/// A single check-off of a habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub habit_id: HabitId,
    /// The calendar date the habit counts as done on
    pub completed_at: NaiveDate,
    /// When the completion was recorded (display only)
    pub logged_at: DateTime<Utc>,
}

impl Completion {
    pub fn new(habit_id: HabitId, completed_at: NaiveDate, logged_at: DateTime<Utc>) -> Self {
        Self {
            habit_id,
            completed_at,
            logged_at,
        }
    }
}
