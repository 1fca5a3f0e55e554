/// Analytics for habit completion histories
///
/// `period` buckets dates into periods, `streak` derives streaks, breaks
/// and completion rates from them. This module assembles per-habit reports
/// and the cross-habit aggregate queries; it is the only analytics code
/// that reads from storage (one completions fetch per habit).

pub mod period;
pub mod streak;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::{Habit, Periodicity};
use crate::storage::{HabitStore, StorageError};

/// A habit's completion history, detached from storage
///
/// The aggregate queries work on these plain values so they stay pure and
/// testable without a database.
#[derive(Debug, Clone)]
pub struct HabitHistory {
    pub name: String,
    pub periodicity: Periodicity,
    pub completions: Vec<NaiveDate>,
}

impl HabitHistory {
    pub fn new(name: String, periodicity: Periodicity, completions: Vec<NaiveDate>) -> Self {
        Self {
            name,
            periodicity,
            completions,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.completions.is_empty()
    }
}

/// The derived statistics of a single habit
///
/// Plain values only; rendering (including the `---` placeholder for rates
/// of monthly and yearly habits) is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitReport {
    pub name: String,
    pub periodicity: Periodicity,
    pub last_completion: Option<DateTime<Utc>>,
    pub longest_streak: u32,
    pub current_streak: u32,
    pub total_breaks: u32,
    /// Fraction in [0, 1]; None for monthly and yearly habits
    pub completion_rate: Option<f64>,
}

/// The extreme value of an aggregate query and every habit sharing it
///
/// Ties are never broken arbitrarily: all habits at the extreme are named.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme<T> {
    pub value: T,
    pub habits: Vec<String>,
}

/// Compute the full statistics report for one habit history
pub fn analyze_history(
    history: &HabitHistory,
    last_completion: Option<DateTime<Utc>>,
    today: NaiveDate,
) -> HabitReport {
    HabitReport {
        name: history.name.clone(),
        periodicity: history.periodicity,
        last_completion,
        longest_streak: streak::longest_streak(&history.completions, history.periodicity, today),
        current_streak: streak::current_streak(&history.completions, history.periodicity, today),
        total_breaks: streak::break_count(&history.completions, history.periodicity, today),
        completion_rate: streak::completion_rate(
            &history.completions,
            history.periodicity,
            today,
        ),
    }
}

/// Fetch a habit's completion history from storage
pub fn load_history<S: HabitStore>(store: &S, habit: &Habit) -> Result<HabitHistory, StorageError> {
    let completions = store.completion_dates(habit.id)?;
    Ok(HabitHistory::new(
        habit.name.clone(),
        habit.periodicity,
        completions,
    ))
}

/// Load the histories of all of a user's habits that have any data
///
/// Habits that were never completed are excluded from the all-habit
/// analysis.
pub fn histories_with_data<S: HabitStore>(
    store: &S,
    habits: &[Habit],
) -> Result<Vec<HabitHistory>, StorageError> {
    let mut histories = Vec::new();
    for habit in habits {
        let history = load_history(store, habit)?;
        if history.has_data() {
            histories.push(history);
        }
    }
    Ok(histories)
}

/// The longest streak across all habits, with every habit that reached it
///
/// "Longest" counts periods, so a daily habit has a better shot at the top
/// spot than a yearly one. Returns None when no habit has data.
pub fn longest_streak_of_all(histories: &[HabitHistory], today: NaiveDate) -> Option<Extreme<u32>> {
    let streaks: Vec<(&str, u32)> = histories
        .iter()
        .filter(|h| h.has_data())
        .map(|h| {
            (
                h.name.as_str(),
                streak::longest_streak(&h.completions, h.periodicity, today),
            )
        })
        .collect();
    let best = streaks.iter().map(|(_, len)| *len).max()?;
    Some(Extreme {
        value: best,
        habits: streaks
            .iter()
            .filter(|(_, len)| *len == best)
            .map(|(name, _)| name.to_string())
            .collect(),
    })
}

/// The worst four-week completion rate across all daily and weekly habits
///
/// Monthly and yearly habits define no completion rate and do not take
/// part. Returns None when no eligible habit has data.
pub fn worst_completion_rate_of_all(
    histories: &[HabitHistory],
    today: NaiveDate,
) -> Option<Extreme<f64>> {
    let rates: Vec<(&str, f64)> = histories
        .iter()
        .filter(|h| h.has_data())
        .filter_map(|h| {
            streak::completion_rate(&h.completions, h.periodicity, today)
                .map(|rate| (h.name.as_str(), rate))
        })
        .collect();
    let worst = rates
        .iter()
        .map(|(_, rate)| *rate)
        .min_by(|a, b| a.total_cmp(b))?;
    Some(Extreme {
        value: worst,
        habits: rates
            .iter()
            .filter(|(_, rate)| *rate == worst)
            .map(|(name, _)| name.to_string())
            .collect(),
    })
}
