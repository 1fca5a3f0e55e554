/// Command for analyzing habits
///
/// Produces the per-habit statistics report plus the two cross-habit
/// aggregates. All numbers come from the analytics module; this file only
/// fetches histories and renders.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{self, Extreme, HabitReport};
use crate::storage::HabitStore;
use crate::AppError;

/// Parameters for the analyze command
#[derive(Debug)]
pub struct AnalyzeParams<'a> {
    pub user_name: &'a str,
    /// Analyze a single habit; None analyzes all habits with data
    pub habit_name: Option<&'a str>,
    pub today: NaiveDate,
}

/// Response from the analyze command
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub reports: Vec<HabitReport>,
    pub longest_streak_of_all: Option<Extreme<u32>>,
    pub worst_completion_rate_of_all: Option<Extreme<f64>>,
    pub message: String,
}

/// Analyze one habit or all of a user's habits
///
/// Habits that were never completed are excluded from the all-habit view;
/// analyzing such a habit directly reports zeros. The aggregate lines name
/// every habit tied at the extreme.
pub fn analyze_habits<S: HabitStore>(
    store: &S,
    params: AnalyzeParams<'_>,
) -> Result<AnalyzeResponse, AppError> {
    let user = store.find_user(params.user_name)?;

    let (reports, histories) = match params.habit_name {
        Some(habit_name) => {
            let habit = store.find_habit(user.id, habit_name)?;
            let history = analytics::load_history(store, &habit)?;
            let last = store.last_completion(habit.id)?;
            let report = analytics::analyze_history(&history, last, params.today);
            (vec![report], vec![history])
        }
        None => {
            let habits = store.habits_for_user(user.id)?;
            let histories = analytics::histories_with_data(store, &habits)?;
            let mut reports = Vec::with_capacity(histories.len());
            for (habit, history) in habits
                .iter()
                .filter(|h| histories.iter().any(|hist| hist.name == h.name))
                .zip(histories.iter())
            {
                let last = store.last_completion(habit.id)?;
                reports.push(analytics::analyze_history(history, last, params.today));
            }
            (reports, histories)
        }
    };

    let longest = analytics::longest_streak_of_all(&histories, params.today);
    let worst = analytics::worst_completion_rate_of_all(&histories, params.today);

    let message = render(&reports, longest.as_ref(), worst.as_ref());

    Ok(AnalyzeResponse {
        reports,
        longest_streak_of_all: longest,
        worst_completion_rate_of_all: worst,
        message,
    })
}

/// Percent display for a completion rate; monthly/yearly habits show "---"
fn rate_display(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{}%", (rate * 100.0).round() as u32),
        None => "---".to_string(),
    }
}

fn render(
    reports: &[HabitReport],
    longest: Option<&Extreme<u32>>,
    worst: Option<&Extreme<f64>>,
) -> String {
    if reports.is_empty() {
        return "No habit data yet. Check off a habit first.".to_string();
    }

    let mut lines = Vec::new();
    for report in reports {
        lines.push(report.name.clone());
        lines.push(format!("  periodicity:                     {}", report.periodicity));
        lines.push(format!(
            "  last completion:                 {}",
            report
                .last_completion
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".to_string())
        ));
        lines.push(format!("  longest streak:                  {}", report.longest_streak));
        lines.push(format!("  current streak:                  {}", report.current_streak));
        lines.push(format!("  breaks total:                    {}", report.total_breaks));
        lines.push(format!(
            "  completion rate (last 4 weeks):  {}",
            rate_display(report.completion_rate)
        ));
        lines.push(String::new());
    }

    if let Some(extreme) = longest {
        lines.push(format!(
            "Longest streak of all: {} ({})",
            extreme.value,
            extreme.habits.join(", ")
        ));
    }
    if let Some(extreme) = worst {
        lines.push(format!(
            "Lowest completion rate (last 4 weeks): {} ({})",
            rate_display(Some(extreme.value)),
            extreme.habits.join(", ")
        ));
    }

    lines.join("\n")
}
