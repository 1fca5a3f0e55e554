/// Commands for listing users and habits

use serde::Serialize;

use crate::domain::{Habit, Periodicity, User};
use crate::storage::HabitStore;
use crate::AppError;

/// Response from listing users
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub message: String,
}

/// List all known users
pub fn list_users<S: HabitStore>(store: &S) -> Result<ListUsersResponse, AppError> {
    let users = store.list_users()?;
    let message = if users.is_empty() {
        "No users yet. Create one with add-user.".to_string()
    } else {
        users
            .iter()
            .map(|u| u.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ListUsersResponse { users, message })
}

/// Parameters for listing habits
#[derive(Debug)]
pub struct ListHabitsParams<'a> {
    pub user_name: &'a str,
    pub periodicity: Option<Periodicity>,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<Habit>,
    /// The periodicities in use, in daily-to-yearly order
    pub periodicities: Vec<Periodicity>,
    pub message: String,
}

/// List a user's tracked habits, optionally filtered by periodicity
pub fn list_habits<S: HabitStore>(
    store: &S,
    params: ListHabitsParams<'_>,
) -> Result<ListHabitsResponse, AppError> {
    let user = store.find_user(params.user_name)?;
    let mut habits = store.habits_for_user(user.id)?;

    // the canonical order is daily, weekly, monthly, yearly
    let periodicities: Vec<Periodicity> = Periodicity::ALL
        .into_iter()
        .filter(|p| habits.iter().any(|h| h.periodicity == *p))
        .collect();

    if let Some(wanted) = params.periodicity {
        habits.retain(|h| h.periodicity == wanted);
    }

    let message = if habits.is_empty() {
        "No tracked habits.".to_string()
    } else {
        habits
            .iter()
            .map(|h| format!("{}  ({})", h.name, h.periodicity))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ListHabitsResponse {
        habits,
        periodicities,
        message,
    })
}
