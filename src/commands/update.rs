/// Commands for modifying existing habits

use serde::Serialize;

use crate::domain::{Habit, Periodicity};
use crate::storage::HabitStore;
use crate::AppError;

/// Response from modifying a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub habit_name: String,
    pub message: String,
}

/// Rename a habit, keeping its completion history
pub fn rename_habit<S: HabitStore>(
    store: &S,
    user_name: &str,
    habit_name: &str,
    new_name: &str,
) -> Result<UpdateHabitResponse, AppError> {
    Habit::validate_name(new_name)?;
    let user = store.find_user(user_name)?;
    let habit = store.find_habit(user.id, habit_name)?;
    store.rename_habit(habit.id, new_name)?;

    Ok(UpdateHabitResponse {
        habit_name: new_name.to_string(),
        message: format!("Renamed {} to {}", habit_name, new_name),
    })
}

/// Change a habit's periodicity
///
/// The completion history is kept; future analysis buckets the old
/// completions into periods of the new length.
pub fn change_periodicity<S: HabitStore>(
    store: &S,
    user_name: &str,
    habit_name: &str,
    periodicity: Periodicity,
) -> Result<UpdateHabitResponse, AppError> {
    let user = store.find_user(user_name)?;
    let habit = store.find_habit(user.id, habit_name)?;
    store.change_periodicity(habit.id, periodicity)?;

    Ok(UpdateHabitResponse {
        habit_name: habit.name,
        message: format!("{} is now a {} habit", habit_name, periodicity),
    })
}
