//! Calendar math over milestone dates.
//!
//! Pure functions of the milestone's optional dates and a caller-supplied
//! "today". Absent, expired, or inverted dates degrade to zero days — the
//! calculator never fails and never panics.
//!
//! Day counts are calendar-day differences: a due date of tomorrow is one
//! remaining day whether it is 00:01 or 23:59 right now. Callers holding a
//! timestamp truncate it to its UTC date via [`remaining_days_at`] /
//! [`elapsed_days_at`].

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::Milestone;

/// Whole days from `today` until the due date.
///
/// Zero when the milestone has no due date or the due date has passed.
#[must_use]
pub fn remaining_days(milestone: &Milestone, today: NaiveDate) -> u64 {
    match milestone.due_date {
        Some(due) if due >= today => days_between(today, due),
        _ => 0,
    }
}

/// Whole days from the start date until `today`.
///
/// Zero when the milestone has no start date or the start date is in the
/// future.
#[must_use]
pub fn elapsed_days(milestone: &Milestone, today: NaiveDate) -> u64 {
    match milestone.start_date {
        Some(start) if start <= today => days_between(start, today),
        _ => 0,
    }
}

/// Whether the due date has passed.
#[must_use]
pub fn expired(milestone: &Milestone, today: NaiveDate) -> bool {
    milestone.due_date.is_some_and(|due| due < today)
}

/// Whether the milestone has not started yet.
#[must_use]
pub fn upcoming(milestone: &Milestone, today: NaiveDate) -> bool {
    milestone.start_date.is_some_and(|start| start > today)
}

/// [`remaining_days`] against the UTC date of a timestamp.
#[must_use]
pub fn remaining_days_at(milestone: &Milestone, now: DateTime<Utc>) -> u64 {
    remaining_days(milestone, now.date_naive())
}

/// [`elapsed_days`] against the UTC date of a timestamp.
#[must_use]
pub fn elapsed_days_at(milestone: &Milestone, now: DateTime<Utc>) -> u64 {
    elapsed_days(milestone, now.date_naive())
}

/// Non-negative calendar-day difference. Callers guarantee `from <= to`.
fn days_between(from: NaiveDate, to: NaiveDate) -> u64 {
    u64::try_from((to - from).num_days()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{elapsed_days, elapsed_days_at, expired, remaining_days, remaining_days_at, upcoming};
    use crate::model::Milestone;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn with_due(due: NaiveDate) -> Milestone {
        Milestone {
            due_date: Some(due),
            ..Milestone::default()
        }
    }

    fn with_start(start: NaiveDate) -> Milestone {
        Milestone {
            start_date: Some(start),
            ..Milestone::default()
        }
    }

    #[test]
    fn remaining_zero_without_due_date() {
        assert_eq!(remaining_days(&Milestone::default(), date(2026, 8, 7)), 0);
    }

    #[test]
    fn remaining_zero_when_expired() {
        let milestone = with_due(date(2026, 8, 5));
        assert_eq!(remaining_days(&milestone, date(2026, 8, 7)), 0);
    }

    #[test]
    fn remaining_counts_days_until_due() {
        let milestone = with_due(date(2026, 8, 9));
        assert_eq!(remaining_days(&milestone, date(2026, 8, 7)), 2);
    }

    #[test]
    fn remaining_zero_on_due_day() {
        let milestone = with_due(date(2026, 8, 7));
        assert_eq!(remaining_days(&milestone, date(2026, 8, 7)), 0);
        assert!(!expired(&milestone, date(2026, 8, 7)));
    }

    #[test]
    fn elapsed_zero_without_start_date() {
        assert_eq!(elapsed_days(&Milestone::default(), date(2026, 8, 7)), 0);
    }

    #[test]
    fn elapsed_zero_for_future_start() {
        let milestone = with_start(date(2026, 8, 9));
        assert_eq!(elapsed_days(&milestone, date(2026, 8, 7)), 0);
    }

    #[test]
    fn elapsed_counts_days_since_start() {
        let milestone = with_start(date(2026, 8, 5));
        assert_eq!(elapsed_days(&milestone, date(2026, 8, 7)), 2);
    }

    #[test]
    fn expired_and_upcoming_flags() {
        let milestone = Milestone {
            start_date: Some(date(2026, 9, 1)),
            due_date: Some(date(2026, 8, 1)),
            ..Milestone::default()
        };
        let today = date(2026, 8, 7);
        assert!(expired(&milestone, today));
        assert!(upcoming(&milestone, today));
        // The inverted pair degrades to zero on both counters.
        assert_eq!(remaining_days(&milestone, today), 0);
        assert_eq!(elapsed_days(&milestone, today), 0);
    }

    #[test]
    fn timestamp_wrappers_truncate_to_utc_dates() {
        // 23h59m before the due date is still one calendar day away.
        let milestone = with_due(date(2026, 8, 8));
        let now = Utc
            .with_ymd_and_hms(2026, 8, 7, 23, 59, 0)
            .single()
            .expect("valid test timestamp");
        assert_eq!(remaining_days_at(&milestone, now), 1);

        // One minute past midnight on the due day: zero remaining.
        let later = Utc
            .with_ymd_and_hms(2026, 8, 8, 0, 1, 0)
            .single()
            .expect("valid test timestamp");
        assert_eq!(remaining_days_at(&milestone, later), 0);
    }

    #[test]
    fn elapsed_at_day_boundary() {
        let milestone = with_start(date(2026, 8, 5));
        let just_after_midnight = Utc
            .with_ymd_and_hms(2026, 8, 7, 0, 0, 1)
            .single()
            .expect("valid test timestamp");
        assert_eq!(elapsed_days_at(&milestone, just_after_midnight), 2);
    }
}
