/// Command for deleting a habit

use serde::Serialize;

use crate::storage::HabitStore;
use crate::AppError;

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub habit_name: String,
    pub message: String,
}

/// Delete a habit and all of its completions
pub fn delete_habit<S: HabitStore>(
    store: &S,
    user_name: &str,
    habit_name: &str,
) -> Result<DeleteHabitResponse, AppError> {
    let user = store.find_user(user_name)?;
    let habit = store.find_habit(user.id, habit_name)?;
    store.delete_habit(habit.id)?;

    Ok(DeleteHabitResponse {
        habit_name: habit.name,
        message: format!("Deleted {} and its completion history", habit_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create::{create_habit, create_user, CreateHabitParams};
    use crate::domain::Periodicity;
    use crate::storage::SqliteStore;
    use chrono::Utc;

    #[test]
    fn test_delete_habit() {
        let store = SqliteStore::open_in_memory().unwrap();
        create_user(&store, "StephanieHochge").unwrap();
        create_habit(
            &store,
            CreateHabitParams {
                user_name: "StephanieHochge",
                habit_name: "Dance",
                periodicity: Periodicity::Weekly,
                now: Utc::now(),
            },
        )
        .unwrap();

        delete_habit(&store, "StephanieHochge", "Dance").unwrap();
        let user = store.find_user("StephanieHochge").unwrap();
        assert!(store.find_habit(user.id, "Dance").is_err());

        // deleting again reports the habit as missing
        assert!(delete_habit(&store, "StephanieHochge", "Dance").is_err());
    }
}
