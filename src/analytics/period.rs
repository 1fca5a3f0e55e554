/// Period calculation: pure date arithmetic, no I/O
///
/// Every completion date is bucketed into a period (day, ISO week, month or
/// year) identified by its canonical start date. Streak and break analysis
/// operates exclusively on these period starts.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::Periodicity;

/// The canonical first date of the period containing `date`
///
/// Daily periods start on the date itself, weekly periods on the Monday of
/// that week, monthly periods on the 1st and yearly periods on January 1st.
pub fn period_start(periodicity: Periodicity, date: NaiveDate) -> NaiveDate {
    match periodicity {
        Periodicity::Daily => date,
        Periodicity::Weekly => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        Periodicity::Monthly => date - Duration::days(i64::from(date.day0())),
        Periodicity::Yearly => date - Duration::days(i64::from(date.ordinal0())),
    }
}

/// Map each completion date to the start of the period containing it
///
/// The result preserves order and may contain duplicates; see
/// [`crate::analytics::streak::tidy_starts`] for the cleanup step.
pub fn period_starts(periodicity: Periodicity, dates: &[NaiveDate]) -> Vec<NaiveDate> {
    dates.iter().map(|&d| period_start(periodicity, d)).collect()
}

/// Parse ISO-8601 date strings into dates
///
/// Completion dates cross the storage boundary as `YYYY-MM-DD` text; this
/// converts a whole batch in one go.
pub fn parse_iso_dates(raw: &[String]) -> Result<Vec<NaiveDate>, chrono::ParseError> {
    raw.iter().map(|s| s.parse::<NaiveDate>()).collect()
}

/// The maximum tolerated distance between two consecutive period starts
///
/// Anything larger counts as a break. The monthly value is 32 days: months
/// are 28 to 31 days long, so the gap between the starts of two adjacent
/// months is at most 31 days, while skipping a month yields at least 59.
/// The yearly value of 366 covers leap years the same way.
pub fn allowed_gap(periodicity: Periodicity) -> Duration {
    match periodicity {
        Periodicity::Daily => Duration::days(1),
        Periodicity::Weekly => Duration::days(7),
        Periodicity::Monthly => Duration::days(32),
        Periodicity::Yearly => Duration::days(366),
    }
}

/// The start of the period immediately after the one containing `date`
///
/// Adding the allowed gap to a period start always lands inside the next
/// period, so re-bucketing the sum yields its start.
pub fn next_period_start(periodicity: Periodicity, date: NaiveDate) -> NaiveDate {
    period_start(periodicity, period_start(periodicity, date) + allowed_gap(periodicity))
}

/// The start of the period immediately before a given period start
pub fn previous_period_start(periodicity: Periodicity, start: NaiveDate) -> NaiveDate {
    period_start(periodicity, start - Duration::days(1))
}
