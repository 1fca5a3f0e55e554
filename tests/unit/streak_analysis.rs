/// Analyzer tests over realistic multi-month habit histories
///
/// Four habits, one per periodicity, with completion histories spanning
/// late 2021, analyzed as of a fixed 2022-01-20. Expected values are
/// worked out by hand from the period lists.

use chrono::NaiveDate;

use habit_tracker::analytics::streak::{
    break_count, break_indices, completion_rate, current_streak, final_period_starts,
    longest_streak, streak_lengths,
};
use habit_tracker::analytics::{longest_streak_of_all, worst_completion_rate_of_all, HabitHistory};
use habit_tracker::Periodicity;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn today() -> NaiveDate {
    d(2022, 1, 20)
}

/// Daily habit: December 1-27 except the 6th and 28th, then 29-31.
/// Contains duplicate completions on the 2nd.
fn teeth() -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = (1..=27)
        .filter(|&day| day != 6)
        .map(|day| d(2021, 12, day))
        .collect();
    dates.extend([d(2021, 12, 2), d(2021, 12, 29), d(2021, 12, 30), d(2021, 12, 31)]);
    dates
}

/// Weekly habit: active most weeks of November and December 2021, with
/// one skipped week in early December.
fn dance() -> Vec<NaiveDate> {
    vec![
        d(2021, 11, 6),
        d(2021, 11, 7),
        d(2021, 11, 11),
        d(2021, 11, 13),
        d(2021, 11, 14),
        d(2021, 11, 21),
        d(2021, 11, 25),
        d(2021, 11, 27),
        d(2021, 11, 28),
        d(2021, 12, 2),
        d(2021, 12, 4),
        d(2021, 12, 5),
        d(2021, 12, 16),
        d(2021, 12, 18),
        d(2021, 12, 19),
        d(2021, 12, 21),
        d(2021, 12, 30),
    ]
}

/// Monthly habit: June through December 2021 except August.
fn windows() -> Vec<NaiveDate> {
    vec![
        d(2021, 6, 23),
        d(2021, 7, 6),
        d(2021, 9, 15),
        d(2021, 10, 2),
        d(2021, 11, 17),
        d(2021, 12, 30),
    ]
}

/// Yearly habit: completed in 2021 and 2022.
fn dentist() -> Vec<NaiveDate> {
    vec![d(2021, 12, 5), d(2022, 12, 17)]
}

#[test]
fn final_period_list_sizes() {
    // 29 distinct days + sentinel
    assert_eq!(final_period_starts(&teeth(), Periodicity::Daily, today()).len(), 30);
    // 8 distinct weeks + sentinel
    assert_eq!(final_period_starts(&dance(), Periodicity::Weekly, today()).len(), 9);
    // 6 distinct months + sentinel
    assert_eq!(final_period_starts(&windows(), Periodicity::Monthly, today()).len(), 7);
    // 2 distinct years + sentinel
    assert_eq!(final_period_starts(&dentist(), Periodicity::Yearly, today()).len(), 3);
}

#[test]
fn break_indices_per_periodicity() {
    let teeth_final = final_period_starts(&teeth(), Periodicity::Daily, today());
    assert_eq!(break_indices(&teeth_final, Periodicity::Daily), vec![4, 25, 28]);

    let dance_final = final_period_starts(&dance(), Periodicity::Weekly, today());
    assert_eq!(break_indices(&dance_final, Periodicity::Weekly), vec![4, 7]);

    let windows_final = final_period_starts(&windows(), Periodicity::Monthly, today());
    assert_eq!(break_indices(&windows_final, Periodicity::Monthly), vec![1, 5]);

    let dentist_final = final_period_starts(&dentist(), Periodicity::Yearly, today());
    assert_eq!(break_indices(&dentist_final, Periodicity::Yearly), vec![1]);
}

#[test]
fn streak_lengths_per_periodicity() {
    assert_eq!(streak_lengths(&teeth(), Periodicity::Daily, today()), vec![5, 21, 3]);
    assert_eq!(streak_lengths(&dance(), Periodicity::Weekly, today()), vec![5, 3]);
    assert_eq!(streak_lengths(&windows(), Periodicity::Monthly, today()), vec![2, 4]);
    assert_eq!(streak_lengths(&dentist(), Periodicity::Yearly, today()), vec![2]);
}

#[test]
fn longest_streaks() {
    assert_eq!(longest_streak(&teeth(), Periodicity::Daily, today()), 21);
    assert_eq!(longest_streak(&dance(), Periodicity::Weekly, today()), 5);
    assert_eq!(longest_streak(&windows(), Periodicity::Monthly, today()), 4);
    assert_eq!(longest_streak(&dentist(), Periodicity::Yearly, today()), 2);
}

#[test]
fn current_streaks() {
    // teeth and dance lapsed weeks before "today"
    assert_eq!(current_streak(&teeth(), Periodicity::Daily, today()), 0);
    assert_eq!(current_streak(&dance(), Periodicity::Weekly, today()), 0);
    // windows was done last month: the four-month streak is still alive
    assert_eq!(current_streak(&windows(), Periodicity::Monthly, today()), 4);
    // dentist was done both last year and this year
    assert_eq!(current_streak(&dentist(), Periodicity::Yearly, today()), 2);
}

#[test]
fn break_counts() {
    // teeth and dance: every break index is a real lapse
    assert_eq!(break_count(&teeth(), Periodicity::Daily, today()), 3);
    assert_eq!(break_count(&dance(), Periodicity::Weekly, today()), 2);
    // windows and dentist were recently active, so the trailing break
    // index is only the sentinel artifact
    assert_eq!(break_count(&windows(), Periodicity::Monthly, today()), 1);
    assert_eq!(break_count(&dentist(), Periodicity::Yearly, today()), 0);
}

#[test]
fn completion_rates() {
    // window 2021-12-23 .. 2022-01-19: Dec 23-27 and Dec 29-31 completed
    let teeth_rate = completion_rate(&teeth(), Periodicity::Daily, today()).unwrap();
    assert!((teeth_rate - 8.0 / 28.0).abs() < f64::EPSILON);

    // weeks of Dec 20 and Dec 27 completed, Jan 3 and Jan 10 missed
    let dance_rate = completion_rate(&dance(), Periodicity::Weekly, today()).unwrap();
    assert!((dance_rate - 2.0 / 4.0).abs() < f64::EPSILON);

    assert_eq!(completion_rate(&windows(), Periodicity::Monthly, today()), None);
    assert_eq!(completion_rate(&dentist(), Periodicity::Yearly, today()), None);
}

#[test]
fn aggregates_across_the_fixture() {
    let histories = vec![
        HabitHistory::new("Brush teeth".to_string(), Periodicity::Daily, teeth()),
        HabitHistory::new("Dance".to_string(), Periodicity::Weekly, dance()),
        HabitHistory::new("Clean windows".to_string(), Periodicity::Monthly, windows()),
        HabitHistory::new("Go to dentist".to_string(), Periodicity::Yearly, dentist()),
    ];

    let longest = longest_streak_of_all(&histories, today()).unwrap();
    assert_eq!(longest.value, 21);
    assert_eq!(longest.habits, vec!["Brush teeth".to_string()]);

    // only the daily and weekly habits take part
    let worst = worst_completion_rate_of_all(&histories, today()).unwrap();
    assert!((worst.value - 8.0 / 28.0).abs() < f64::EPSILON);
    assert_eq!(worst.habits, vec!["Brush teeth".to_string()]);
}

#[test]
fn aggregates_with_no_data() {
    let histories = vec![HabitHistory::new(
        "Sleep".to_string(),
        Periodicity::Daily,
        Vec::new(),
    )];
    assert!(longest_streak_of_all(&histories, today()).is_none());
    assert!(worst_completion_rate_of_all(&histories, today()).is_none());
}
