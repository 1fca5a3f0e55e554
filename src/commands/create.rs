/// Commands for creating users and habits

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Habit, Periodicity, User};
use crate::storage::HabitStore;
use crate::AppError;

/// Response from creating a user
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub user: User,
    pub message: String,
}

/// Create a new user account
pub fn create_user<S: HabitStore>(store: &S, name: &str) -> Result<CreateUserResponse, AppError> {
    User::validate_name(name)?;
    let user = store.create_user(name)?;

    Ok(CreateUserResponse {
        message: format!("Created user {}", user.name),
        user,
    })
}

/// Parameters for creating a habit
#[derive(Debug)]
pub struct CreateHabitParams<'a> {
    pub user_name: &'a str,
    pub habit_name: &'a str,
    pub periodicity: Periodicity,
    pub now: DateTime<Utc>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub habit: Habit,
    pub message: String,
}

/// Create a new habit for an existing user
pub fn create_habit<S: HabitStore>(
    store: &S,
    params: CreateHabitParams<'_>,
) -> Result<CreateHabitResponse, AppError> {
    Habit::validate_name(params.habit_name)?;
    let user = store.find_user(params.user_name)?;
    let habit = store.create_habit(user.id, params.habit_name, params.periodicity, params.now)?;

    Ok(CreateHabitResponse {
        message: format!(
            "Created {} habit {} for {}",
            habit.periodicity, habit.name, user.name
        ),
        habit,
    })
}
