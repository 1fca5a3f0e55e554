/// End-to-end tests: commands against a real SQLite database file

use chrono::{Duration, NaiveDate, Utc};
use tempfile::NamedTempFile;

use habit_tracker::commands::{
    analyze_habits, check_off_habit, create_habit, create_user, delete_habit, list_habits,
    AnalyzeParams, CheckOffParams, CreateHabitParams, ListHabitsParams,
};
use habit_tracker::{HabitStore, Periodicity, SqliteStore, StorageError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 20).unwrap()
}

fn check_off(store: &SqliteStore, user: &str, habit: &str, date: NaiveDate) {
    check_off_habit(
        store,
        CheckOffParams {
            user_name: user,
            habit_name: habit,
            date: Some(date),
            now: Utc::now(),
            today: today(),
        },
    )
    .expect("check-off failed");
}

#[test]
fn test_full_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path()).expect("Failed to open storage");

    create_user(&store, "StephanieHochge").unwrap();
    for (name, periodicity) in [
        ("Brush teeth", Periodicity::Daily),
        ("Dance", Periodicity::Weekly),
        ("Sleep", Periodicity::Daily),
    ] {
        create_habit(
            &store,
            CreateHabitParams {
                user_name: "StephanieHochge",
                habit_name: name,
                periodicity,
                now: Utc::now(),
            },
        )
        .unwrap();
    }

    // ten consecutive days of teeth brushing ending yesterday
    for offset in 1..=10 {
        check_off(&store, "StephanieHochge", "Brush teeth", today() - Duration::days(offset));
    }
    // dancing in two consecutive weeks, then a long lapse
    check_off(&store, "StephanieHochge", "Dance", today() - Duration::weeks(5));
    check_off(&store, "StephanieHochge", "Dance", today() - Duration::weeks(6));

    let response = analyze_habits(
        &store,
        AnalyzeParams {
            user_name: "StephanieHochge",
            habit_name: None,
            today: today(),
        },
    )
    .unwrap();

    // Sleep has no data and is excluded
    assert_eq!(response.reports.len(), 2);

    let teeth = response.reports.iter().find(|r| r.name == "Brush teeth").unwrap();
    assert_eq!(teeth.longest_streak, 10);
    assert_eq!(teeth.current_streak, 10);
    assert_eq!(teeth.total_breaks, 0);
    let rate = teeth.completion_rate.unwrap();
    assert!((rate - 10.0 / 28.0).abs() < f64::EPSILON);

    let dance = response.reports.iter().find(|r| r.name == "Dance").unwrap();
    assert_eq!(dance.longest_streak, 2);
    assert_eq!(dance.current_streak, 0);
    assert_eq!(dance.total_breaks, 1);

    let longest = response.longest_streak_of_all.unwrap();
    assert_eq!(longest.value, 10);
    assert_eq!(longest.habits, vec!["Brush teeth".to_string()]);

    let worst = response.worst_completion_rate_of_all.unwrap();
    assert_eq!(worst.habits, vec!["Dance".to_string()]);
    assert_eq!(worst.value, 0.0);
}

#[test]
fn test_data_survives_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path().to_path_buf();

    {
        let store = SqliteStore::new(&path).unwrap();
        create_user(&store, "RajaBe").unwrap();
        create_habit(
            &store,
            CreateHabitParams {
                user_name: "RajaBe",
                habit_name: "Brush teeth",
                periodicity: Periodicity::Daily,
                now: Utc::now(),
            },
        )
        .unwrap();
        check_off(&store, "RajaBe", "Brush teeth", today());
    }

    let store = SqliteStore::new(&path).unwrap();
    let user = store.find_user("RajaBe").unwrap();
    let habit = store.find_habit(user.id, "Brush teeth").unwrap();
    assert_eq!(store.completion_dates(habit.id).unwrap(), vec![today()]);
}

#[test]
fn test_habits_listing_after_delete() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path()).unwrap();

    create_user(&store, "StephanieHochge").unwrap();
    for name in ["Brush teeth", "Dance"] {
        create_habit(
            &store,
            CreateHabitParams {
                user_name: "StephanieHochge",
                habit_name: name,
                periodicity: Periodicity::Daily,
                now: Utc::now(),
            },
        )
        .unwrap();
    }

    delete_habit(&store, "StephanieHochge", "Dance").unwrap();

    let response = list_habits(
        &store,
        ListHabitsParams {
            user_name: "StephanieHochge",
            periodicity: None,
        },
    )
    .unwrap();
    let names: Vec<&str> = response.habits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Brush teeth"]);
}

#[test]
fn test_unknown_user_is_a_typed_error() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path()).unwrap();

    let result = store.find_user("nobody");
    assert!(matches!(result, Err(StorageError::UserNotFound { .. })));
}
