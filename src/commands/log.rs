/// Command for checking off a habit

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::analytics::{self, streak};
use crate::domain::{Completion, DomainError};
use crate::storage::HabitStore;
use crate::AppError;

/// Parameters for recording a completion
#[derive(Debug)]
pub struct CheckOffParams<'a> {
    pub user_name: &'a str,
    pub habit_name: &'a str,
    /// The date the habit counts as done on; defaults to today. The
    /// interactive flow of back-dating a missed check-off maps onto this.
    pub date: Option<NaiveDate>,
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

/// Response from recording a completion
#[derive(Debug, Serialize)]
pub struct CheckOffResponse {
    pub habit_name: String,
    pub completed_at: NaiveDate,
    pub current_streak: u32,
    pub message: String,
}

/// Record a habit completion and report the streak it extends
pub fn check_off_habit<S: HabitStore>(
    store: &S,
    params: CheckOffParams<'_>,
) -> Result<CheckOffResponse, AppError> {
    let user = store.find_user(params.user_name)?;
    let habit = store.find_habit(user.id, params.habit_name)?;

    // back-dating a missed check-off is fine, pre-dating one is not
    let completed_at = params.date.unwrap_or(params.today);
    if completed_at > params.today {
        return Err(DomainError::FutureCompletionDate(completed_at).into());
    }
    store.add_completion(&Completion::new(habit.id, completed_at, params.now))?;

    let history = analytics::load_history(store, &habit)?;
    let current =
        streak::current_streak(&history.completions, habit.periodicity, params.today);

    Ok(CheckOffResponse {
        message: format!(
            "Checked off {} on {}. Current streak: {} {}",
            habit.name,
            completed_at,
            current,
            periods_word(current)
        ),
        habit_name: habit.name,
        completed_at,
        current_streak: current,
    })
}

fn periods_word(count: u32) -> &'static str {
    if count == 1 {
        "period"
    } else {
        "periods"
    }
}
