/// Streak and break analysis
///
/// Turns a habit's raw completion history into reportable statistics. All
/// functions are pure given the completion dates, the periodicity and an
/// explicit `today`, so tests can pin the clock.
///
/// The pipeline: completion dates are bucketed into period starts, sorted
/// and deduplicated, then one synthetic future period start is appended.
/// The sentinel lets the same gap detection that finds historical breaks
/// also answer "is the most recent streak already broken as of today",
/// without special-casing the tail of the list.

use chrono::{Duration, NaiveDate};

use crate::analytics::period::{allowed_gap, period_start, period_starts, previous_period_start};
use crate::domain::Periodicity;

/// Which period to test a habit's activity against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRef {
    Current,
    Previous,
}

/// Sort period starts ascending and drop duplicates
///
/// Several completions in the same period collapse to a single period
/// start. Idempotent: tidying a tidy list changes nothing.
pub fn tidy_starts(mut starts: Vec<NaiveDate>) -> Vec<NaiveDate> {
    starts.sort_unstable();
    starts.dedup();
    starts
}

/// Append the synthetic future period start
///
/// The sentinel is the start of the period two allowed gaps past `today`,
/// which is strictly after any real activity and at least one full period
/// away from the current one. It only forces trailing-break detection and
/// is never reported as a streak event.
pub fn add_future_period(
    mut starts: Vec<NaiveDate>,
    periodicity: Periodicity,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let future = period_start(periodicity, today + allowed_gap(periodicity) * 2);
    if starts.last() != Some(&future) {
        starts.push(future);
    }
    starts
}

/// The final period list: tidy period starts plus the future sentinel
///
/// This is the canonical input to break and streak arithmetic. It is
/// recomputed from scratch on every query and never persisted.
pub fn final_period_starts(
    completions: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let starts = tidy_starts(period_starts(periodicity, completions));
    add_future_period(starts, periodicity, today)
}

/// Differences between consecutive dates in a list
pub fn element_diffs(starts: &[NaiveDate]) -> Vec<Duration> {
    starts.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Indices after which a streak ends
///
/// Index `i` is a break index when the gap from `final_starts[i]` to its
/// successor exceeds the allowed gap. Because of the future sentinel there
/// is always at least one break index unless the habit was active in the
/// current or an adjacent period.
pub fn break_indices(final_starts: &[NaiveDate], periodicity: Periodicity) -> Vec<usize> {
    let in_time = allowed_gap(periodicity);
    element_diffs(final_starts)
        .iter()
        .enumerate()
        .filter(|(_, gap)| **gap > in_time)
        .map(|(index, _)| index)
        .collect()
}

/// The lengths of all completed streaks, in chronological order
///
/// Computed as consecutive differences of the break-index list with a
/// virtual index -1 prepended, so the first streak is measured even though
/// no break precedes it.
pub fn streak_lengths(
    completions: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
) -> Vec<u32> {
    let final_starts = final_period_starts(completions, periodicity, today);
    let mut boundaries: Vec<i64> = vec![-1];
    boundaries.extend(break_indices(&final_starts, periodicity).iter().map(|&i| i as i64));
    boundaries
        .windows(2)
        .map(|w| (w[1] - w[0]) as u32)
        .collect()
}

/// The longest streak the habit ever reached
///
/// A habit with no completions has a longest streak of 0; the pipeline is
/// not entered in that case.
pub fn longest_streak(
    completions: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
) -> u32 {
    if completions.is_empty() {
        return 0;
    }
    streak_lengths(completions, periodicity, today)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Whether the habit was completed in the current or the previous period
///
/// Membership test of the respective period start in the final period
/// list. The future sentinel can never collide with either period.
pub fn completed_in_period(
    final_starts: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
    which: PeriodRef,
) -> bool {
    let current = period_start(periodicity, today);
    let wanted = match which {
        PeriodRef::Current => current,
        PeriodRef::Previous => previous_period_start(periodicity, current),
    };
    final_starts.contains(&wanted)
}

/// The length of the streak the habit is currently on
///
/// Completed in neither the current nor the previous period: 0. Completed
/// in the current period only: a fresh streak of 1. Otherwise the streak
/// is ongoing and its length is the last entry of the streak lengths.
pub fn current_streak(
    completions: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
) -> u32 {
    if completions.is_empty() {
        return 0;
    }
    let final_starts = final_period_starts(completions, periodicity, today);
    if !completed_in_period(&final_starts, periodicity, today, PeriodRef::Previous) {
        if completed_in_period(&final_starts, periodicity, today, PeriodRef::Current) {
            1
        } else {
            0
        }
    } else {
        streak_lengths(completions, periodicity, today)
            .last()
            .copied()
            .unwrap_or(0)
    }
}

/// How many times the habit was broken since it was first completed
///
/// Counts the break indices of the final period list. When the habit was
/// completed in the current or the previous period, the break detected at
/// the tail is an artifact of the future sentinel, not a real lapse, and
/// is not counted.
pub fn break_count(
    completions: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
) -> u32 {
    if completions.is_empty() {
        return 0;
    }
    let final_starts = final_period_starts(completions, periodicity, today);
    let breaks = break_indices(&final_starts, periodicity).len() as u32;
    let recently_active = completed_in_period(&final_starts, periodicity, today, PeriodRef::Current)
        || completed_in_period(&final_starts, periodicity, today, PeriodRef::Previous);
    if recently_active {
        // a history reaching past today can close the gap to the sentinel,
        // leaving no break index to discount
        breaks.saturating_sub(1)
    } else {
        breaks
    }
}

/// The fraction of the last four weeks' periods with at least one completion
///
/// Counts period starts in the half-open window from the period four weeks
/// ago (inclusive) up to the current period (exclusive, it is not over
/// yet), divided by 28 possible periods for daily habits and 4 for weekly
/// ones. Monthly and yearly habits have no completion rate.
pub fn completion_rate(
    completions: &[NaiveDate],
    periodicity: Periodicity,
    today: NaiveDate,
) -> Option<f64> {
    if !periodicity.has_completion_rate() {
        return None;
    }
    let possible_periods = match periodicity {
        Periodicity::Daily => 28u32,
        _ => 4u32,
    };
    let window_start = period_start(periodicity, today - Duration::weeks(4));
    let current = period_start(periodicity, today);
    let final_starts = final_period_starts(completions, periodicity, today);
    let completed = final_starts
        .iter()
        .filter(|&&start| start >= window_start && start < current)
        .count();
    Some(completed as f64 / f64::from(possible_periods))
}
